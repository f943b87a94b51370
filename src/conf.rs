use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub base_url: String,
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    //email
    pub from_email: String,
    pub contact_email: String,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    //storage
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    pub s3_bucket_name: String,
    //sessions
    pub session_ttl_hours: i64,
    pub temp_password_length: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.session_ttl_hours <= 0 {
            s.session_ttl_hours = 12;
        }
        if s.temp_password_length < 8 {
            s.temp_password_length = 10;
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
