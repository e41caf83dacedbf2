use crate::region::Layout;
use derivative::Derivative;
use log::*;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[derivative(Default)]
    Dark,
    Light,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    pub theme: Theme,
    pub panels: Vec<Layout>,
    pub screen_x: i32,
    pub screen_y: i32,
    pub max_result_rows: usize,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            panels: vec![Layout::CurrentAthlete, Layout::MultiRank],
            screen_x: 1920,
            screen_y: 1080,
            max_result_rows: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Used when the engine doesn't send a time allowance for the athlete
    pub attempt_allowance: u16,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            attempt_allowance: 60,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub display: Display,
    pub timing: Timing,
}

impl Config {
    pub fn new_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let config_file = match read_to_string(path) {
            Ok(f) => f,
            Err(e) => {
                error!("Failed to read config file: {}", e);
                return Err(Box::new(e));
            }
        };

        match toml::from_str(&config_file) {
            Ok(c) => Ok(c),
            Err(e) => {
                error!("Failed to parse config file: {}", e);
                Err(Box::new(e))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;

    const DISPLAY_STRING: &str = indoc!(
        r#"theme = "dark"
           panels = ["current_athlete", "multi_rank"]
           screen_x = 1920
           screen_y = 1080
           max_result_rows = 20"#
    );

    const TIMING_STRING: &str = indoc!(r#"attempt_allowance = 60"#);

    #[test]
    fn test_deser_display() {
        let display: Display = Default::default();
        let deser = toml::from_str(DISPLAY_STRING);
        assert_eq!(deser, Ok(display));
    }

    #[test]
    fn test_deser_timing() {
        let timing: Timing = Default::default();
        let deser = toml::from_str(TIMING_STRING);
        assert_eq!(deser, Ok(timing));
    }

    #[test]
    fn test_deser_config() {
        let config: Config = Default::default();
        let deser = toml::from_str(&format!(
            "[display]\n{}\n[timing]\n{}",
            DISPLAY_STRING, TIMING_STRING
        ));
        assert_eq!(deser, Ok(config));
    }

    #[test]
    fn test_new_from_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("lift-common-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            indoc!(
                r#"
                [display]
                theme = "light"
                panels = ["multi_rank"]
                screen_x = 1280
                screen_y = 720
                max_result_rows = 12

                [timing]
                attempt_allowance = 120
                "#
            ),
        )
        .unwrap();

        let config = Config::new_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.display.theme, Theme::Light);
        assert_eq!(config.display.panels, vec![Layout::MultiRank]);
        assert_eq!(config.timing.attempt_allowance, 120);

        assert!(Config::new_from_file(&path).is_err());
    }
}
