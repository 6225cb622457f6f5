//! Usage synopses and `detail` descriptions for every command.

use super::CommandKind;

pub(super) fn usage(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Help => "help",
        CommandKind::Detail => "detail <command>",
        CommandKind::Mkdir => "mkdir <folder_name>",
        CommandKind::Touch => "touch <file_name>",
        CommandKind::Ls => "ls",
        CommandKind::Cd => "cd <directory_name> | cd /",
        CommandKind::Pwd => "pwd",
        CommandKind::Rm => "rm <name>",
        CommandKind::Open => "open <file_name>",
        CommandKind::Edit => "edit <file_name>",
        CommandKind::Mv => "mv <source> <destination>",
        CommandKind::Cp => "cp <source> <destination>",
        CommandKind::Rename => "rename <old_name> <new_name>",
        CommandKind::Rmdir => "rmdir <folder_name>",
        CommandKind::Cat => "cat <file_name>",
        CommandKind::Clear => "clear",
    }
}

pub(super) fn description(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Help => "Shows the available commands.",
        CommandKind::Detail => {
            "Shows usage and a longer description of a single command.\n\
             Example:\n  detail mkdir"
        }
        CommandKind::Mkdir => {
            "Creates a new, empty folder in the current directory.\n\
             An existing entry with the same name is replaced.\n\
             Example:\n  mkdir new_folder"
        }
        CommandKind::Touch => {
            "Creates a file in the current directory holding the default text.\n\
             An existing entry with the same name is replaced.\n\
             Example:\n  touch my_file.txt"
        }
        CommandKind::Ls => {
            "Lists the files and folders of the current directory in creation order.\n\
             Example:\n  ls"
        }
        CommandKind::Cd => {
            "Enters a folder of the current directory. 'cd /' returns to the root.\n\
             Entry names cannot contain '/'.\n\
             Example:\n  cd my_folder"
        }
        CommandKind::Pwd => {
            "Prints the path of the current directory; the root prints as '/'.\n\
             Example:\n  pwd"
        }
        CommandKind::Rm => {
            "Deletes a file or folder of the current directory, including everything\n\
             inside a folder.\n\
             Example:\n  rm my_file.txt"
        }
        CommandKind::Open => {
            "Displays the contents of a file, with a heading.\n\
             Example:\n  open my_file.txt"
        }
        CommandKind::Edit => {
            "Shows a file's current content, then takes the next line you enter as\n\
             its new content.\n\
             Example:\n  edit my_file.txt"
        }
        CommandKind::Mv => {
            "Gives an entry of the current directory a new name. Fails if the\n\
             destination name is already taken.\n\
             Example:\n  mv old_name.txt new_name.txt"
        }
        CommandKind::Cp => {
            "Copies an entry of the current directory under a new name. Folders are\n\
             copied with everything inside them. An existing destination is replaced.\n\
             Example:\n  cp report.txt report_backup.txt"
        }
        CommandKind::Rename => {
            "Renames an entry of the current directory. Unlike 'mv', an existing entry\n\
             with the new name is replaced.\n\
             Example:\n  rename old_name.txt new_name.txt"
        }
        CommandKind::Rmdir => {
            "Removes an empty folder. Fails if the folder has contents or does not exist.\n\
             Example:\n  rmdir empty_folder"
        }
        CommandKind::Cat => {
            "Prints the contents of a file.\n\
             Example:\n  cat my_file.txt"
        }
        CommandKind::Clear => "Clears the terminal screen.",
    }
}
