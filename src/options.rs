use std::path::PathBuf;

use crate::{error::TableError, table::DEFAULT_CAPACITY};

pub const DEFAULT_SEARCH_KEY: &str = "P1005";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
    pub capacity: usize,
    pub search_key: String,
    // Write a chrome://tracing profile here when set
    pub chrome_trace: Option<PathBuf>,
}

impl Default for DemoOptions {
    fn default() -> DemoOptions {
        DemoOptions {
            capacity: DEFAULT_CAPACITY,
            search_key: String::from(DEFAULT_SEARCH_KEY),
            chrome_trace: None,
        }
    }
}

impl DemoOptions {
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), TableError> {
        match name {
            "Capacity" => match value.map(|x| x.parse::<usize>()) {
                Some(Ok(capacity)) if capacity > 0 => {
                    self.capacity = capacity;
                    Ok(())
                }
                _ => Err(TableError::Config(format!(
                    "Bad argument for Capacity: {}",
                    value.unwrap_or("<missing>")
                ))),
            },
            "SearchKey" => {
                let Some(key) = value else {
                    return Err(TableError::Config(String::from("Missing SearchKey value")));
                };
                self.search_key = key.to_string();
                Ok(())
            }
            "ChromeTrace" => {
                self.chrome_trace = Some(PathBuf::from(value.unwrap_or("trace.json")));
                Ok(())
            }
            _ => Err(TableError::Config(format!("No such Option: {name}"))),
        }
    }

    /// Builds options from `Name=value` arguments. A bare `Name` sets the option
    /// without a value.
    pub fn from_args<I, S>(args: I) -> Result<DemoOptions, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = DemoOptions::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg.split_once('=') {
                Some((name, value)) => options.set_option(name, Some(value))?,
                None => options.set_option(arg, None)?,
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TableError;
    use crate::options::*;

    #[test]
    fn defaults() {
        let options = DemoOptions::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(options, DemoOptions::default());
        assert_eq!(options.capacity, 10);
        assert_eq!(options.search_key, "P1005");
        assert_eq!(options.chrome_trace, None);
    }

    #[test]
    fn parses_named_options() {
        let options =
            DemoOptions::from_args(["Capacity=7", "SearchKey=P1021", "ChromeTrace"]).unwrap();
        assert_eq!(options.capacity, 7);
        assert_eq!(options.search_key, "P1021");
        assert_eq!(options.chrome_trace, Some(PathBuf::from("trace.json")));
    }

    #[test]
    fn rejects_bad_options() {
        assert!(matches!(
            DemoOptions::from_args(["Capacity=0"]),
            Err(TableError::Config(_))
        ));
        assert!(matches!(
            DemoOptions::from_args(["Capacity=ten"]),
            Err(TableError::Config(_))
        ));
        assert!(matches!(
            DemoOptions::from_args(["Capacity"]),
            Err(TableError::Config(_))
        ));
        assert_eq!(
            DemoOptions::from_args(["Threads=4"]),
            Err(TableError::Config(String::from("No such Option: Threads")))
        );
    }
}
