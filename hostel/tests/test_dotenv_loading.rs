use std::env;
use std::fs;

use hostel::settings::dotenv::load_dotenv_files;
use tempfile::TempDir;

#[test]
fn test_local_file_and_environment_take_precedence() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "HOSTEL__DATABASE__URL=file://from-env.json\nHOSTEL_DOTENV_ONLY_IN_ENV=yes\nHOSTEL_DOTENV_PRESET=from_env\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".env.local"),
        "HOSTEL__DATABASE__URL=memory://\n",
    )
    .unwrap();
    env::set_var("HOSTEL_DOTENV_PRESET", "from_process");

    let loaded = load_dotenv_files(dir.path());

    assert_eq!(
        loaded,
        vec![dir.path().join(".env.local"), dir.path().join(".env")]
    );
    assert_eq!(env::var("HOSTEL__DATABASE__URL").unwrap(), "memory://");
    assert_eq!(env::var("HOSTEL_DOTENV_ONLY_IN_ENV").unwrap(), "yes");
    assert_eq!(env::var("HOSTEL_DOTENV_PRESET").unwrap(), "from_process");

    for name in [
        "HOSTEL__DATABASE__URL",
        "HOSTEL_DOTENV_ONLY_IN_ENV",
        "HOSTEL_DOTENV_PRESET",
    ] {
        env::remove_var(name);
    }
}

#[test]
fn test_missing_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "HOSTEL_DOTENV_SINGLE=1\n").unwrap();

    assert_eq!(load_dotenv_files(dir.path()), vec![dir.path().join(".env")]);
    assert!(load_dotenv_files(&dir.path().join("nowhere")).is_empty());

    env::remove_var("HOSTEL_DOTENV_SINGLE");
}
