// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use anyhow::Result;

pub struct Args {
    pub file: Option<String>,
    pub show_all_debug: bool,
    pub write_logs_to_file: bool,
}

impl Args {
    /// Parse the arguments
    ///
    /// At most one positional argument is accepted: the path of the file to
    /// edit. When omitted, the editor falls back to the configured scratch
    /// path.
    ///
    /// # Errors
    /// Will return an error if the arguments are invalid
    pub fn parse<It: Iterator<Item = String>>(mut it: It) -> Result<Self> {
        trace!("Parsing args");

        let program_name = it.next();
        let mut file = None;
        let mut error = false;
        let mut show_all_debug = false;
        #[cfg(debug_assertions)]
        let mut write_logs_to_file = true;
        #[cfg(not(debug_assertions))]
        let mut write_logs_to_file = false;

        for arg in it {
            match arg {
                arg if arg.as_str() == "--help" => Self::help(program_name.as_deref()),
                arg if arg.as_str() == "--show-all-debug" => show_all_debug = true,
                arg if arg.as_str().contains("--write-logs-to-file") => {
                    let mut internal_error = false;
                    write_logs_to_file = arg.split('=').nth(1).map_or_else(
                        || {
                            println!("Missing argument for --write-logs-to-file");
                            Self::help(program_name.as_deref());
                            internal_error = true;
                            false
                        },
                        |val| {
                            val.parse().unwrap_or_else(|_| {
                                println!("Invalid argument for --write-logs-to-file");
                                Self::help(program_name.as_deref());
                                error = true;
                                false
                            })
                        },
                    );

                    if internal_error {
                        error = true;
                    }
                }
                arg if arg.starts_with("--") => {
                    println!("Invalid argument {arg}");
                    Self::help(program_name.as_deref());
                    error = true;
                }
                arg => {
                    if file.is_some() {
                        println!("Only one file may be edited at a time");
                        Self::help(program_name.as_deref());
                        error = true;
                    } else {
                        file = Some(arg);
                    }
                }
            }
        }

        if error {
            return Err(anyhow::anyhow!("Invalid arguments"));
        }

        Ok(Self {
            file,
            show_all_debug,
            write_logs_to_file,
        })
    }

    fn help(program_name: Option<&str>) {
        trace!("Showing help");

        let program_name = program_name.unwrap_or("ted");
        println!(
            "\
                 Usage:\n\
                 {program_name} [FILE] [ARGS]\n\
                 \n\
                 Args:\n\
                    FILE: Optional, path of the file to edit (defaults to the scratch file)\n--show-all-debug: Log at debug level and below\n--help: Show this help message\n--write-logs-to-file=[true/false]\
                 "
        );
    }
}
