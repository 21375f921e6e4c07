mod common;
use common::*;
use turtle::mach::{Event, Runtime, Val};

#[test]
fn test_print_text() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "HELLO""#);
    assert_eq!(exec(&mut r), "HELLO\n");
    r.enter(r#"print "HELLO WORLD""#);
    assert_eq!(exec(&mut r), "HELLO WORLD\n");
    r.enter("PRINT");
    assert_eq!(exec(&mut r), "\n");
}

#[test]
fn test_print_two_values() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "HELLO" "WORLD""#);
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
    r.enter(r#"PRINT "OOPS"#);
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
}

#[test]
fn test_let_and_print() {
    let mut r = Runtime::default();
    r.enter("LET A = 5");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), "5\n");
    r.enter("PRINT UNDEFINEDVAR");
    assert_eq!(exec(&mut r), "0\n");
    r.enter("LET b=a");
    r.enter("PRINT B");
    assert_eq!(exec(&mut r), "5\n");
    r.enter("LET C = 2.0");
    r.enter("PRINT C");
    assert_eq!(exec(&mut r), "2.0\n");
    assert_eq!(r.var().fetch("c"), Val::Float(2.0));
}

#[test]
fn test_let_syntax_error() {
    let mut r = Runtime::default();
    r.enter("LET 5 = A");
    r.enter("LET A");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n?SYNTAX ERROR\n");
}

#[test]
fn test_unknown_keyword() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, &["10 PRINT 1", "20 JUMP 10", "30 PRINT 3"]), "1\n?SYNTAX ERROR\n");
}

#[test]
fn test_goto_undefined_line() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, &["10 GOTO 999", "20 PRINT 1"]), "?UNDEF LINE\n");
    assert!(!r.is_running());
    r.enter("GOTO 999");
    assert_eq!(exec(&mut r), "?UNDEF LINE\n");
}

#[test]
fn test_goto_skips() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 GOTO 30", "20 PRINT 2", "30 PRINT 3"]),
        "3\n"
    );
}

#[test]
fn test_direct_goto_starts_run() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("GOTO 20");
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_end() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 PRINT 1", "20 END", "30 PRINT 3"]),
        "1\n"
    );
}

#[test]
fn test_for_counts() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 FOR I=1 TO 3", "20 PRINT I", "30 NEXT I"]),
        "1\n2\n3\n"
    );
    assert_eq!(r.var().fetch("I"), Val::Integer(4));
    assert!(r.flow().is_empty());
}

#[test]
fn test_for_zero_trip() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 FOR I=5 TO 1", "20 PRINT I", "30 NEXT I", "40 PRINT \"AFTER\""]),
        "AFTER\n"
    );
    assert_eq!(r.var().fetch("I"), Val::Integer(5));
}

#[test]
fn test_for_step() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 FOR I=3 TO 1 STEP -1", "20 PRINT I", "30 NEXT"]),
        "3\n2\n1\n"
    );
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 FOR X=0 TO 1 STEP 0.5", "20 PRINT X", "30 NEXT X"]),
        "0\n0.5\n1.0\n"
    );
}

#[test]
fn test_for_with_variables() {
    let mut r = Runtime::default();
    r.enter("LET N = 3");
    r.enter("LET S = 2");
    assert_eq!(
        run(&mut r, &["10 FOR I=N TO 7 STEP S", "20 PRINT I", "30 NEXT I"]),
        "3\n5\n7\n"
    );
}

#[test]
fn test_nested_for() {
    let mut r = Runtime::default();
    assert_eq!(
        run(
            &mut r,
            &[
                "10 FOR I=1 TO 2",
                "20 FOR J=1 TO 2",
                "30 PRINT J",
                "40 NEXT J",
                "50 NEXT I",
            ]
        ),
        "1\n2\n1\n2\n"
    );
}

#[test]
fn test_next_outer_discards_inner() {
    let mut r = Runtime::default();
    assert_eq!(
        run(
            &mut r,
            &[
                "10 FOR I=1 TO 2",
                "20 FOR J=1 TO 9",
                "30 PRINT I",
                "40 NEXT I",
            ]
        ),
        "1\n2\n"
    );
    assert!(r.flow().is_empty());
}

#[test]
fn test_next_without_for() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 PRINT 1", "20 NEXT", "30 PRINT 3"]),
        "1\n?NEXT WITHOUT FOR\n"
    );
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["10 FOR I=1 TO 2", "20 NEXT J"]),
        "?NEXT WITHOUT FOR\n"
    );
}

#[test]
fn test_variables_survive_run() {
    let mut r = Runtime::default();
    r.enter("LET B = 7");
    assert_eq!(run(&mut r, &["10 PRINT B", "20 LET B = 8"]), "7\n");
    r.enter("PRINT B");
    assert_eq!(exec(&mut r), "8\n");
}

#[test]
fn test_list_and_delete() {
    let mut r = Runtime::default();
    r.enter("LIST");
    assert_eq!(exec(&mut r), "(empty)\n");
    r.enter("20 FD 5");
    r.enter("10 PU");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 PU\n20 FD 5\n");
    r.enter("10 PD");
    r.enter("20");
    r.enter("list");
    assert_eq!(exec(&mut r), "10 PD\n");
}

#[test]
fn test_new() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("LET A = 1");
    r.enter("NEW");
    assert_eq!(exec(&mut r), "");
    assert!(r.listing().is_empty());
    assert!(r.var().is_empty());
    r.enter("RUN");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_edit_then_run() {
    let mut r = Runtime::default();
    r.enter("EDIT");
    assert_eq!(r.execute(10), Event::Edit);
    assert_eq!(r.editor().map(|e| e.lines().to_vec()), Some(vec!["10 ".to_string()]));
    if let Some(editor) = r.editor_mut() {
        editor.insert("PRINT 5");
        editor.enter();
        editor.insert("PRINT 6");
    }
    r.run();
    assert!(r.editor().is_none());
    assert_eq!(exec(&mut r), "READY.\n5\n6\n");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 PRINT 5\n20 PRINT 6\n");
}

#[test]
fn test_edit_commit_drops_unnumbered() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("EDIT");
    assert_eq!(exec(&mut r), "<EDIT>\n");
    if let Some(editor) = r.editor_mut() {
        editor.enter();
        editor.home();
        editor.insert("REMARK ");
        editor.end();
        editor.enter();
        editor.insert("10 PRINT 2");
    }
    r.commit();
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.listing().text(), ["10 PRINT 2"]);
}

#[test]
fn test_runaway_program_interrupted() {
    let mut r = Runtime::default();
    r.enter("10 FD 1");
    r.enter("20 RT 1");
    r.enter("30 GOTO 10");
    r.enter("RUN");
    assert_eq!(r.execute(1000), Event::Running);
    assert_eq!(r.execute(1000), Event::Running);
    r.interrupt();
    let s = exec(&mut r);
    assert!(s.starts_with("?BREAK IN "));
    assert!(!r.is_running());
}

#[test]
fn test_cls_and_bye() {
    let mut r = Runtime::default();
    r.enter("FD 10");
    r.enter("CLS");
    assert_eq!(r.execute(10), Event::Cls);
    assert!(r.canvas().strokes().is_empty());
    r.enter("BYE");
    assert_eq!(r.execute(10), Event::Bye);
}
