//! Command execution logic.
//!
//! Contains the `execute_command` function that runs validated commands
//! against the tree store and returns results.

use tracing::debug;

use crate::config::HELP_TEXT;
use crate::core::VirtualFs;
use crate::core::error::ShellError;
use crate::models::{EntryKind, OutputLine, VirtualPath};

use super::{Command, CommandKind, CommandResult, Effect};

/// Argument to `cd` that returns to the root.
const ROOT_ARG: &str = "/";

/// Execute a validated command and return its output.
///
/// Errors are rendered into the result; the shell is always ready for the
/// next command afterwards.
///
/// # Arguments
///
/// * `cmd` - The command to execute
/// * `fs` - Tree store, mutated in place
/// * `new_file_content` - Initial content for files made by `touch`
pub fn execute_command(cmd: Command, fs: &mut VirtualFs, new_file_content: &str) -> CommandResult {
    debug!(?cmd, "executing command");
    match run(cmd, fs, new_file_content) {
        Ok(result) => result,
        Err(err) => CommandResult::error(&err),
    }
}

/// Finish a pending `edit` with the line the operator entered.
pub fn complete_edit(path: &VirtualPath, content: &str, fs: &mut VirtualFs) -> CommandResult {
    match fs.edit_file(path, content) {
        Ok(confirmation) => CommandResult::success(confirmation),
        Err(err) => CommandResult::error(&ShellError::from(err)),
    }
}

fn run(
    cmd: Command,
    fs: &mut VirtualFs,
    new_file_content: &str,
) -> Result<CommandResult, ShellError> {
    let cwd = fs.cwd().clone();

    let result = match cmd {
        Command::Help => CommandResult::output(HELP_TEXT.lines().map(OutputLine::text).collect()),
        Command::Detail(name) => execute_detail(&name)?,
        Command::Mkdir(name) => {
            fs.create(&name, "", EntryKind::Directory, &cwd)?;
            CommandResult::success(format!("Folder '{}' created.", name))
        }
        Command::Touch(name) => {
            fs.create(&name, new_file_content, EntryKind::File, &cwd)?;
            CommandResult::success(format!("File '{}' created.", name))
        }
        Command::Ls => execute_ls(fs)?,
        Command::Cd(name) => {
            if name == ROOT_ARG {
                fs.change_to_root();
            } else {
                fs.change_dir(&name)?;
            }
            CommandResult::output(vec![OutputLine::text(format!(
                "Changed directory to '{}'.",
                fs.current_path_string()
            ))])
        }
        Command::Pwd => CommandResult::output(vec![OutputLine::text(format!(
            "Current directory: {}",
            fs.current_path_string()
        ))]),
        Command::Rm(name) => {
            fs.remove(&name)?;
            CommandResult::success(format!("Item '{}' deleted.", name))
        }
        Command::Open(name) => {
            let content = fs.open_file(&cwd.join(&name))?;
            CommandResult::output(vec![
                OutputLine::info("File content:"),
                OutputLine::text(content),
            ])
        }
        Command::Edit(name) => {
            let path = cwd.join(&name);
            let content = fs.open_file(&path)?;
            CommandResult::output(vec![
                OutputLine::info(format!("Editing file '{}'. Current content:", name)),
                OutputLine::text(content),
            ])
            .with_effect(Effect::AwaitContent(path))
        }
        Command::Mv {
            source,
            destination,
        } => {
            fs.move_entry(&source, &destination)?;
            CommandResult::success(format!(
                "Item '{}' moved/renamed to '{}'.",
                source, destination
            ))
        }
        Command::Cp {
            source,
            destination,
        } => {
            fs.copy_entry(&source, &destination)?;
            CommandResult::success(format!("Item '{}' copied to '{}'.", source, destination))
        }
        Command::Rename { old_name, new_name } => {
            fs.rename_entry(&old_name, &new_name)?;
            CommandResult::success(format!("Renamed '{}' to '{}'.", old_name, new_name))
        }
        Command::Rmdir(name) => {
            fs.remove_dir(&name)?;
            CommandResult::success(format!("Folder '{}' removed.", name))
        }
        Command::Cat(name) => CommandResult::output(vec![OutputLine::text(fs.cat(&name)?)]),
        Command::Clear => CommandResult::empty().with_effect(Effect::ClearScreen),
    };

    Ok(result)
}

/// Execute `detail` command.
fn execute_detail(name: &str) -> Result<CommandResult, ShellError> {
    let kind = CommandKind::from_name(name).ok_or_else(|| ShellError::NoDetail(name.to_string()))?;

    let mut lines = vec![
        OutputLine::info(format!("Details for '{}':", kind)),
        OutputLine::text(format!("Usage: {}", kind.usage())),
    ];
    lines.extend(kind.detail().lines().map(OutputLine::text));
    Ok(CommandResult::output(lines))
}

/// Execute `ls` command.
fn execute_ls(fs: &VirtualFs) -> Result<CommandResult, ShellError> {
    let entries = fs.list_current()?;

    let mut lines = vec![OutputLine::info("Items in the current directory:")];
    lines.extend(
        entries
            .into_iter()
            .map(|entry| OutputLine::list_entry(entry.name, entry.kind)),
    );
    Ok(CommandResult::output(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FsOptions;
    use crate::models::OutputLineData;

    const DEFAULT_CONTENT: &str = "This is a new file.";

    fn exec(fs: &mut VirtualFs, cmd: Command) -> CommandResult {
        execute_command(cmd, fs, DEFAULT_CONTENT)
    }

    fn rendered(result: &CommandResult) -> Vec<String> {
        result.output.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_mkdir_and_ls() {
        let mut fs = VirtualFs::default();
        let result = exec(&mut fs, Command::Mkdir("docs".into()));
        assert_eq!(rendered(&result), vec!["Folder 'docs' created."]);

        exec(&mut fs, Command::Touch("a.txt".into()));
        let result = exec(&mut fs, Command::Ls);
        assert_eq!(
            rendered(&result),
            vec!["Items in the current directory:", "docs", "a.txt"]
        );
    }

    #[test]
    fn test_touch_uses_default_content() {
        let mut fs = VirtualFs::default();
        exec(&mut fs, Command::Touch("a.txt".into()));
        let result = exec(&mut fs, Command::Cat("a.txt".into()));
        assert_eq!(rendered(&result), vec![DEFAULT_CONTENT]);
    }

    #[test]
    fn test_cd_and_pwd() {
        let mut fs = VirtualFs::default();
        exec(&mut fs, Command::Mkdir("docs".into()));

        let result = exec(&mut fs, Command::Pwd);
        assert_eq!(rendered(&result), vec!["Current directory: /"]);

        let result = exec(&mut fs, Command::Cd("docs".into()));
        assert_eq!(rendered(&result), vec!["Changed directory to 'docs'."]);

        let result = exec(&mut fs, Command::Cd("/".into()));
        assert_eq!(rendered(&result), vec!["Changed directory to '/'."]);
        assert!(fs.cwd().is_root());
    }

    #[test]
    fn test_cd_missing_directory() {
        let mut fs = VirtualFs::default();
        let result = exec(&mut fs, Command::Cd("ghost".into()));
        assert_eq!(rendered(&result), vec!["Error: 'ghost' not found."]);
        assert!(matches!(result.output[0].data, OutputLineData::Error(_)));
    }

    #[test]
    fn test_edit_requests_content() {
        let mut fs = VirtualFs::default();
        exec(&mut fs, Command::Touch("a.txt".into()));

        let result = exec(&mut fs, Command::Edit("a.txt".into()));
        assert_eq!(
            rendered(&result),
            vec!["Editing file 'a.txt'. Current content:", DEFAULT_CONTENT]
        );
        let expected = VirtualPath::root().join("a.txt");
        assert_eq!(result.effect, Some(Effect::AwaitContent(expected.clone())));

        let done = complete_edit(&expected, "hello", &mut fs);
        assert_eq!(rendered(&done), vec!["File 'a.txt' edited successfully."]);
        assert_eq!(fs.cat("a.txt").unwrap(), "hello");
    }

    #[test]
    fn test_edit_missing_file_does_not_wait() {
        let mut fs = VirtualFs::default();
        let result = exec(&mut fs, Command::Edit("ghost".into()));
        assert!(result.effect.is_none());
        assert!(matches!(result.output[0].data, OutputLineData::Error(_)));
    }

    #[test]
    fn test_complete_edit_after_removal() {
        let mut fs = VirtualFs::default();
        let result = complete_edit(&VirtualPath::root().join("gone"), "x", &mut fs);
        assert_eq!(rendered(&result), vec!["Error: 'gone' not found."]);
    }

    #[test]
    fn test_mv_cp_rename_messages() {
        let mut fs = VirtualFs::new(FsOptions::default());
        exec(&mut fs, Command::Touch("a".into()));
        exec(&mut fs, Command::Touch("b".into()));

        let result = exec(
            &mut fs,
            Command::Mv {
                source: "a".into(),
                destination: "b".into(),
            },
        );
        assert_eq!(
            rendered(&result),
            vec!["Error: destination 'b' already exists."]
        );

        let result = exec(
            &mut fs,
            Command::Cp {
                source: "a".into(),
                destination: "c".into(),
            },
        );
        assert_eq!(rendered(&result), vec!["Item 'a' copied to 'c'."]);

        let result = exec(
            &mut fs,
            Command::Rename {
                old_name: "a".into(),
                new_name: "b".into(),
            },
        );
        assert_eq!(rendered(&result), vec!["Renamed 'a' to 'b'."]);
    }

    #[test]
    fn test_rm_and_rmdir() {
        let mut fs = VirtualFs::default();
        exec(&mut fs, Command::Mkdir("docs".into()));

        let result = exec(&mut fs, Command::Rmdir("docs".into()));
        assert_eq!(rendered(&result), vec!["Folder 'docs' removed."]);

        let result = exec(&mut fs, Command::Rm("docs".into()));
        assert_eq!(rendered(&result), vec!["Error: 'docs' not found."]);
    }

    #[test]
    fn test_detail() {
        let mut fs = VirtualFs::default();
        let result = exec(&mut fs, Command::Detail("mkdir".into()));
        let lines = rendered(&result);
        assert_eq!(lines[0], "Details for 'mkdir':");
        assert_eq!(lines[1], "Usage: mkdir <folder_name>");
        assert!(lines.len() > 2);

        let result = exec(&mut fs, Command::Detail("nosuchcmd".into()));
        assert_eq!(
            rendered(&result),
            vec!["Error: no details found for command 'nosuchcmd'."]
        );
    }

    #[test]
    fn test_ls_styles_entries() {
        let mut fs = VirtualFs::default();
        exec(&mut fs, Command::Mkdir("docs".into()));
        let result = exec(&mut fs, Command::Ls);
        assert!(matches!(
            result.output[1].data,
            OutputLineData::ListEntry { ref name, .. } if name == "docs"
        ));
    }

    #[test]
    fn test_help_and_clear() {
        let mut fs = VirtualFs::default();
        let result = exec(&mut fs, Command::Help);
        assert!(!result.output.is_empty());
        assert!(result.effect.is_none());

        let result = exec(&mut fs, Command::Clear);
        assert!(result.output.is_empty());
        assert_eq!(result.effect, Some(Effect::ClearScreen));
    }
}
