use super::*;

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let mut r = Runtime::default();
    r.enter("10 FOR Y=1 TO 2");
    r.enter("20 FOR X=8 TO 9");
    r.enter("30 PRINT X");
    r.enter("40 GOTO 60");
    r.enter("50 NEXT");
    r.enter("60 NEXT Y");
    r.enter("RUN");
    assert_eq!(run(&mut r), "8\n8\n");
    assert!(r.flow().is_empty());
}

#[test]
fn test_zero_trip_skips_nested_loops() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=5 TO 1");
    r.enter("20 FOR J=1 TO 2");
    r.enter("30 PRINT J");
    r.enter("40 NEXT J");
    r.enter("50 NEXT I");
    r.enter("60 PRINT \"DONE\"");
    r.enter("RUN");
    assert_eq!(run(&mut r), "DONE\n");
    assert!(r.flow().is_empty());
}

#[test]
fn test_zero_trip_closed_by_outer_next() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=5 TO 1");
    r.enter("20 FOR J=1 TO 2");
    r.enter("30 PRINT J");
    r.enter("40 NEXT I");
    r.enter("50 PRINT \"DONE\"");
    r.enter("RUN");
    assert_eq!(run(&mut r), "DONE\n");
    assert!(r.flow().is_empty());
}

#[test]
fn test_zero_trip_without_next_ends_run() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=5 TO 1");
    r.enter("20 PRINT I");
    r.enter("RUN");
    assert_eq!(run(&mut r), "");
}

#[test]
fn test_run_clears_abandoned_frames() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=1 TO 9");
    r.enter("20 END");
    r.enter("RUN");
    assert_eq!(run(&mut r), "");
    assert_eq!(r.flow().len(), 1);
    r.enter("RUN");
    assert_eq!(run(&mut r), "");
    assert_eq!(r.flow().len(), 1);
}

#[test]
fn test_runaway_loop_yields() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    assert_eq!(r.execute(100), Event::Running);
    assert!(r.is_running());
    r.interrupt();
    assert_eq!(run_cycles(&mut r, 100), "?BREAK IN 10\n");
    assert!(!r.is_running());
}
