#[cfg(test)]
mod tests {
    use clap::Parser;
    use roster::commands::Cli;
    use roster::db::db::Db;
    use roster::libs::config::{Config, DatabaseLocation, DATABASE_ENV, DB_FILE_NAME};
    use std::path::Path;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext { temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_file_is_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_database(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "database": "/srv/roster/staff.db" }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.database.as_deref(), Some("/srv/roster/staff.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_file(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, "{ database: ").unwrap();

        let error = Config::read_from(&path).unwrap_err();
        assert!(error.to_string().contains("config.json"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_cli_override_wins(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some("from-config.db".to_string()),
        };
        let flag = ctx.temp_dir.path().join("from-flag.db");

        let location = config.database_location(Some(flag.as_path())).unwrap();
        assert_eq!(location, DatabaseLocation::File(flag));

        let location = config.database_location(Some(Path::new(":memory:"))).unwrap();
        assert_eq!(location, DatabaseLocation::InMemory);
    }

    // Environment variables are process wide, so every case that touches them
    // lives in this one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_resolution(ctx: &mut ConfigTestContext) {
        std::env::set_var("HOME", ctx.temp_dir.path());
        std::env::set_var("LOCALAPPDATA", ctx.temp_dir.path());
        std::env::remove_var(DATABASE_ENV);

        let cli = Cli::try_parse_from(["roster", "--database", ":memory:"]).unwrap();
        assert_eq!(cli.database_location().unwrap(), DatabaseLocation::InMemory);
        assert!(std::fs::read_dir(ctx.temp_dir.path()).unwrap().next().is_none());

        let location = Config::default().database_location(None).unwrap();
        match location {
            DatabaseLocation::File(path) => {
                assert!(path.starts_with(ctx.temp_dir.path()));
                assert!(path.ends_with(DB_FILE_NAME));
                let data_dir = path.parent().unwrap();
                assert_eq!(data_dir.file_name().unwrap(), "roster");
                assert_ne!(data_dir.parent().unwrap().file_name().unwrap(), "roster");
            }
            DatabaseLocation::InMemory => panic!("expected a file location"),
        }

        let config = Config {
            database: Some("from-config.db".to_string()),
        };
        assert_eq!(
            config.database_location(None).unwrap(),
            DatabaseLocation::File("from-config.db".into())
        );

        std::env::set_var(DATABASE_ENV, ":memory:");
        assert_eq!(config.database_location(None).unwrap(), DatabaseLocation::InMemory);
        std::env::remove_var(DATABASE_ENV);

        let config_path = Config::path().unwrap();
        std::fs::write(&config_path, r#"{ "database": "from-config.db" }"#).unwrap();
        assert_eq!(Config::read().unwrap(), config);
        assert_eq!(
            Config::locate_database(None).unwrap(),
            DatabaseLocation::File("from-config.db".into())
        );

        // A broken config.json only matters when nothing else names a database.
        std::fs::write(&config_path, "{ database: ").unwrap();
        let cli = Cli::try_parse_from(["roster", "--database", ":memory:"]).unwrap();
        assert_eq!(cli.database_location().unwrap(), DatabaseLocation::InMemory);

        std::env::set_var(DATABASE_ENV, ":memory:");
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert_eq!(cli.database_location().unwrap(), DatabaseLocation::InMemory);
        std::env::remove_var(DATABASE_ENV);

        let error = cli.database_location().unwrap_err();
        assert_eq!(error.to_string(), format!("failed to parse {}", config_path.display()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_schema_bootstrap_is_idempotent(ctx: &mut ConfigTestContext) {
        let location = DatabaseLocation::File(ctx.temp_dir.path().join("staff.db"));

        let db = Db::open(&location).unwrap();
        db.conn.execute("INSERT INTO department (name) VALUES ('Sales')", []).unwrap();
        drop(db);

        let db = Db::open(&location).unwrap();
        let count: i64 = db.conn.query_row("SELECT COUNT(*) FROM department", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);

        let foreign_keys: i64 = db.conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0)).unwrap();
        assert_eq!(foreign_keys, 1);
    }
}
