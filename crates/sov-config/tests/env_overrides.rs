use figment::Jail;
use sov_config::SovConfig;

#[test]
fn env_overrides_default_paths() {
    Jail::expect_with(|jail| {
        jail.set_env("SOVYONOK_PATHS__SPEECH_DIR", "recordings");
        jail.set_env("SOVYONOK_CHECK__TOPIC_DEPTH", "4");

        let config = SovConfig::extract(&SovConfig::figment_from(jail.directory(), None))
            .expect("config loads");
        assert_eq!(config.paths.speech_dir, "recordings");
        assert_eq!(config.check.topic_depth, 4);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sovyonok")?;
        jail.create_file(
            ".sovyonok/config.toml",
            "[paths]\ntasks_dir = \"from/toml\"\n",
        )?;
        jail.set_env("SOVYONOK_PATHS__TASKS_DIR", "from/env");

        let config = SovConfig::extract(&SovConfig::figment_from(jail.directory(), None))
            .expect("config loads");
        assert_eq!(config.paths.tasks_dir, "from/env");
        Ok(())
    });
}

#[test]
fn unrelated_prefixed_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("SOVYONOK_LOG", "debug");

        let config = SovConfig::extract(&SovConfig::figment_from(jail.directory(), None))
            .expect("config loads");
        assert_eq!(config, SovConfig::default());
        Ok(())
    });
}

#[test]
fn dotenv_values_reach_the_process_environment() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "SOVYONOK_LOG_FROM_DOTENV=debug\n")?;

        assert!(SovConfig::load_dotenv(jail.directory()));
        assert_eq!(
            std::env::var("SOVYONOK_LOG_FROM_DOTENV").as_deref(),
            Ok("debug")
        );
        Ok(())
    });
}

#[test]
fn missing_dotenv_is_not_loaded() {
    Jail::expect_with(|jail| {
        assert!(!SovConfig::load_dotenv(jail.directory()));
        Ok(())
    });
}
