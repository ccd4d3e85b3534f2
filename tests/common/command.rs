use crate::common::repository::RepositoryFixture;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn repository(repository_dir: TempDir) -> RepositoryFixture {
    RepositoryFixture::init(repository_dir)
}

pub fn run_topo_order_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("topo-order").expect("Failed to find topo-order binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run the command and return its stdout lines
pub fn topo_order_lines(dir: &Path) -> Vec<String> {
    let output = run_topo_order_command(dir, &[]).assert().success();

    String::from_utf8(output.get_output().stdout.clone())
        .expect("stdout is not valid UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}
