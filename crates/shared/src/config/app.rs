use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub sender: String,
}

impl EmailConfig {
    pub fn init() -> Result<Self> {
        let smtp_user =
            std::env::var("SMTP_USERNAME").context("Missing environment variable: SMTP_USERNAME")?;
        let smtp_pass =
            std::env::var("SMTP_PASSWORD").context("Missing environment variable: SMTP_PASSWORD")?;
        let smtp_server =
            std::env::var("SMTP_HOST").context("Missing environment variable: SMTP_HOST")?;
        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .context("SMTP_PORT must be a valid u16 integer")?;
        let sender = std::env::var("MAIL_SENDER")
            .unwrap_or_else(|_| "no-reply@clinicsync.example.com".to_string());

        Ok(Self {
            smtp_server,
            smtp_port,
            smtp_user,
            smtp_pass,
            sender,
        })
    }
}

/// Bootstrap identity for the seeded admin account.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl AdminConfig {
    pub fn init() -> Result<Self> {
        let email =
            std::env::var("ADMIN_EMAIL").context("Missing environment variable: ADMIN_EMAIL")?;
        let password = std::env::var("ADMIN_PASSWORD")
            .context("Missing environment variable: ADMIN_PASSWORD")?;
        let full_name =
            std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Clinic Administrator".to_string());

        Ok(Self {
            full_name,
            email,
            password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub base_url: String,
    pub email_config: EmailConfig,
    pub admin: AdminConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;
        let base_url =
            std::env::var("BASE_URL").context("Missing environment variable: BASE_URL")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let email_config = EmailConfig::init().context("failed email config")?;
        let admin = AdminConfig::init().context("failed admin config")?;

        Ok(Self {
            database_url,
            run_migrations,
            port,
            base_url,
            email_config,
            admin,
        })
    }
}
