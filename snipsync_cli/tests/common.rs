use assert_cmd::Command;

pub fn snipsync_cmd() -> Command {
	let mut cmd = Command::cargo_bin("snipsync").unwrap();
	cmd.env("NO_COLOR", "1");
	cmd
}
