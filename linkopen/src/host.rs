//! [`Host`] implementation backed by operating system commands.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::dispatch::Host;
use crate::error::{Error, Result};
use crate::platform::Platform;

/// Launches system tools to open, reveal and copy.
///
/// Which tools are used depends on the platform the host was created for:
///
/// | action    | macOS          | Windows             | others                  |
/// |-----------|----------------|---------------------|-------------------------|
/// | reveal    | `open -R`      | `explorer /select,` | `xdg-open <parent>`     |
/// | open app  | `open -a <App>`| `cmd /C` launcher   | app launcher            |
/// | clipboard | `pbcopy`       | `clip`              | `wl-copy`, then `xclip` |
#[derive(Debug, Clone, Copy)]
pub struct SystemHost {
    platform: Platform,
}

impl SystemHost {
    /// Create a host for `platform`.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Build the command that reveals `path`.
    #[must_use]
    pub fn reveal_command(&self, path: &str) -> Command {
        let expanded = self.host_path(path);
        let path: &str = &expanded;
        match self.platform {
            Platform::Macos => {
                let mut cmd = Command::new("open");
                cmd.arg("-R").arg(path);
                cmd
            }
            Platform::Windows => {
                let mut cmd = Command::new("explorer");
                cmd.arg(format!("/select,{path}"));
                cmd
            }
            Platform::Linux | Platform::Unknown => {
                let parent = Path::new(path)
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let mut cmd = Command::new("xdg-open");
                cmd.arg(parent);
                cmd
            }
        }
    }

    /// Build the command that opens `path` in `app_name`.
    #[must_use]
    pub fn open_command(&self, path: &str, app_name: &str) -> Command {
        let path = self.host_path(path);
        match self.platform {
            Platform::Macos => {
                let mut cmd = Command::new("open");
                cmd.arg("-a").arg(app_name).arg(&*path);
                cmd
            }
            // Editor launchers are .cmd shims, which only cmd.exe resolves
            Platform::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.arg("/C").arg(launcher_for(app_name)).arg(&*path);
                cmd
            }
            Platform::Linux | Platform::Unknown => {
                let mut cmd = Command::new(launcher_for(app_name));
                cmd.arg(&*path);
                cmd
            }
        }
    }

    /// The path as handed to system tools, with a leading `~/` expanded.
    fn host_path<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if self.platform.is_windows() {
            return Cow::Borrowed(path);
        }
        expand_home(path, home::home_dir().as_deref())
    }

    fn clipboard_commands(&self) -> Vec<Command> {
        match self.platform {
            Platform::Macos => vec![Command::new("pbcopy")],
            Platform::Windows => vec![Command::new("clip")],
            Platform::Linux | Platform::Unknown => {
                let mut xclip = Command::new("xclip");
                xclip.args(["-selection", "clipboard"]);
                vec![Command::new("wl-copy"), xclip]
            }
        }
    }
}

/// Command-line launcher for an application display name.
///
/// Unknown names are used verbatim.
#[must_use]
pub fn launcher_for(app_name: &str) -> &str {
    match app_name {
        "Visual Studio Code" => "code",
        "Cursor" => "cursor",
        "Zed" => "zed",
        "Ghostty" => "ghostty",
        "Antigravity" => "antigravity",
        other => other,
    }
}

/// Replace a leading `~` or `~/` with `home`.
///
/// Paths are returned unchanged when no home directory is known.
fn expand_home<'a>(path: &'a str, home: Option<&Path>) -> Cow<'a, str> {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Cow::Borrowed(path),
    };
    match home {
        Some(home) if rest.is_empty() => Cow::Owned(home.display().to_string()),
        Some(home) => Cow::Owned(home.join(rest).display().to_string()),
        None => Cow::Borrowed(path),
    }
}

fn run(mut cmd: Command, action: &'static str, path: &str) -> Result<()> {
    log::debug!("running {cmd:?}");
    let status = cmd.status().map_err(|e| Error::HostAction {
        action,
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::HostAction {
            action,
            path: path.to_string(),
            reason: format!("exited with {status}"),
        })
    }
}

fn pipe_into(mut cmd: Command, text: &str) -> std::io::Result<()> {
    let mut child = cmd.stdin(Stdio::piped()).spawn()?;
    feed_and_wait(&mut child, text)
}

/// Write `text` to the child's stdin, then always reap it.
///
/// A write error is reported only after the child has been waited on.
fn feed_and_wait(child: &mut Child, text: &str) -> std::io::Result<()> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {status}")))
    }
}

impl Host for SystemHost {
    fn reveal_item_in_dir(&self, path: &str) -> Result<()> {
        // explorer.exe returns 1 even when the window opened fine
        if self.platform.is_windows() {
            return self
                .reveal_command(path)
                .spawn()
                .map(drop)
                .map_err(|e| Error::HostAction {
                    action: "reveal",
                    path: path.to_string(),
                    reason: e.to_string(),
                });
        }
        run(self.reveal_command(path), "reveal", path)
    }

    fn open_in_app(&self, path: &str, app_name: &str) -> Result<()> {
        run(self.open_command(path, app_name), "open", path)
    }

    fn write_clipboard(&self, text: &str) -> Result<()> {
        let mut last_error = None;
        for cmd in self.clipboard_commands() {
            let program = cmd.get_program().to_string_lossy().into_owned();
            match pipe_into(cmd, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    log::debug!("clipboard via {program} failed: {e}");
                    last_error = Some(format!("{program}: {e}"));
                }
            }
        }
        Err(Error::HostAction {
            action: "copy",
            path: text.to_string(),
            reason: last_error.unwrap_or_else(|| "no clipboard tool".to_string()),
        })
    }
}
