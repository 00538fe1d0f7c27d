use assert_cmd::Command;

pub fn mdpost_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mdpost").unwrap();
    cmd.env_remove("MDPOST_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}
