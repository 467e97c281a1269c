use crate::errors::StartupError;
use notesvc::{BoxedNoteStore, InMemoryStore, PostgreSQLStoreBuilder};
use sqlx::postgres::PgConnectOptions;

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStoreType {
    InMemory,
    PostgreSQL,
}

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub database: Option<DatabaseSettings>,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub notestoretype: NoteStoreType,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub async fn get_note_store(&self) -> Result<BoxedNoteStore, StartupError> {
        match self.notestoretype {
            NoteStoreType::InMemory => {
                warn!("Using the in-memory note store, notes are lost on exit");
                Ok(Box::new(InMemoryStore::new()))
            }
            NoteStoreType::PostgreSQL => {
                let database = self
                    .database
                    .as_ref()
                    .ok_or(StartupError::MissingDatabaseSettings)?;
                let store = PostgreSQLStoreBuilder::new(database.options()?)
                    .max_connections(database.maxopenconnections)
                    .min_connections(database.maxidleconnections)
                    .build()
                    .await?;
                Ok(Box::new(store))
            }
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub port: u16,
    pub host: String,
    pub name: String,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default = "default_max_open_connections")]
    pub maxopenconnections: u32,
    #[serde(default = "default_max_idle_connections")]
    pub maxidleconnections: u32,
}

fn default_max_open_connections() -> u32 {
    10
}

fn default_max_idle_connections() -> u32 {
    2
}

impl DatabaseSettings {
    pub fn options(&self) -> Result<PgConnectOptions, StartupError> {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name);
        if let Some(ref username) = self.username {
            let password = self
                .password
                .as_ref()
                .ok_or(StartupError::MissingDatabasePassword)?;
            Ok(options.username(username).password(password))
        } else {
            Ok(options)
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "127.0.0.1")?
        .set_default("port", 8080)?
        .set_default("notestoretype", "PostgreSQL")?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("notesvc")
                .separator("_"),
        )
        .build()?;
    config.try_deserialize()
}
