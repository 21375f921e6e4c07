use std::env;
use std::path::PathBuf;

/// ## Machine configuration
///
/// Defaults fit a 960×720 screen with a 320 pixel console pane.

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Line number increment for auto-numbering in the editor.
    pub step: u32,
    /// Where `SAVE`, `LOAD` and `DIR` look for `.bas` files.
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas_width: 640,
            canvas_height: 720,
            step: 10,
            dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Defaults overridden by `TURTLE_CANVAS` (`WxH`), `TURTLE_STEP`
    /// and `TURTLE_DIR`. Malformed values are ignored.
    pub fn from_env() -> Config {
        Config::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F: Fn(&str) -> Option<String>>(get: F) -> Config {
        let mut config = Config::default();
        if let Some(canvas) = get("TURTLE_CANVAS") {
            match parse_size(&canvas) {
                Some((width, height)) => {
                    config.canvas_width = width;
                    config.canvas_height = height;
                }
                None => log::warn!("ignoring TURTLE_CANVAS={:?}, expected WxH", canvas),
            }
        }
        if let Some(step) = get("TURTLE_STEP") {
            match step.trim().parse::<u32>() {
                Ok(step) if step > 0 => config.step = step,
                _ => log::warn!("ignoring TURTLE_STEP={:?}", step),
            }
        }
        if let Some(dir) = get("TURTLE_DIR") {
            if !dir.is_empty() {
                config.dir = PathBuf::from(dir);
            }
        }
        config
    }
}

fn parse_size(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.trim().splitn(2, |c| c == 'x' || c == 'X');
    let width = parts.next()?.parse::<u32>().ok()?;
    let height = parts.next()?.parse::<u32>().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("TURTLE_CANVAS", "320x200"),
            ("TURTLE_STEP", "5"),
            ("TURTLE_DIR", "/tmp/progs"),
        ]);
        assert_eq!((c.canvas_width, c.canvas_height), (320, 200));
        assert_eq!(c.step, 5);
        assert_eq!(c.dir, PathBuf::from("/tmp/progs"));
    }

    #[test]
    fn test_malformed_ignored() {
        let c = config(&[("TURTLE_CANVAS", "big"), ("TURTLE_STEP", "0")]);
        assert_eq!(c, Config::default());
    }
}
