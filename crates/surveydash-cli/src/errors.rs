use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No data file given; pass --data <FILE> or a config file with a 'data' entry")]
    MissingDataPath,
}
