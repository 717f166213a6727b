//! Interactive menu session.
//!
//! The session owns all console IO. It validates every number with the pure
//! validators from `warehouse-core` and re-prompts until the input is valid,
//! so the inventory only ever receives in-range arguments. End of input ends
//! the session quietly.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use warehouse_core::{
    MAX_YEAR, MIN_YEAR, due_date, last_day_of_month, parse_bounded_int, parse_long,
};
use warehouse_inventory::{
    ALL_ITEMS_CAPTION, INSUFFICIENT_QUANTITY_CAPTION, Inventory, load_inventory,
    not_expired_caption, render,
};

use crate::config::Config;
use crate::menu::{Menu, main_options, sub_options};

const ABOUT: &str = "
ABOUT

Warehouse System is an application used to monitor warehouse items provided in input .csv file.
Application can only load files with .csv extension.
User (warehouse administrator) is able to:
\t1) see what items have insufficient quantities;
\t2) get list of items that expires by specified date.

HOW TO USE

* Enter corresponding integer values to console
\tto choose an option from menu or submenu
1) Enter option 1 to load data .csv file.
2) Enter a file name without specifying file extension (.csv).
\tExample: sample
3) If input file name is specified correctly,
\tuser is taken to sub menu page.
4) Choose a corresponding option to process data
\tand see the results.
5) Enter 0 from main menu to quit the program or
\tenter 0 from sub menu to return to main menu and load another file
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input is exhausted.
    Closed,
}

#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    preload: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            preload: None,
        }
    }

    /// Load `file_name` before the main menu is shown.
    pub fn preload(mut self, file_name: impl Into<String>) -> Self {
        self.preload = Some(file_name.into());
        self
    }

    /// Give back the output sink (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        if let Some(name) = self.preload.take() {
            if self.open(&name)? == Flow::Closed {
                return Ok(());
            }
        }

        let menu = Menu::main();
        loop {
            write!(self.output, "{}", menu.render())?;
            let Some(option) = self.prompt_bounded("Enter option", 0, menu.max_option())? else {
                return Ok(());
            };

            match option {
                main_options::LOAD => {
                    writeln!(self.output, "Enter input file name (excluding file extension):")?;
                    let Some(name) = self.read_line()? else {
                        return Ok(());
                    };
                    if self.open(&name)? == Flow::Closed {
                        return Ok(());
                    }
                }
                main_options::ABOUT => writeln!(self.output, "{ABOUT}")?,
                _ => {
                    writeln!(self.output, "Closing the application...")?;
                    return Ok(());
                }
            }
        }
    }

    fn open(&mut self, name: &str) -> io::Result<Flow> {
        let path = self.config.resolve(name);
        match load_inventory(&path) {
            Ok(inventory) => self.browse(&Config::file_name(name), &inventory),
            Err(err) => {
                writeln!(self.output, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Sub menu loop over one loaded inventory, titled with its file name.
    fn browse(&mut self, file_name: &str, inventory: &Inventory) -> io::Result<Flow> {
        let menu = Menu::sub(file_name);
        loop {
            write!(self.output, "{}", menu.render())?;
            let Some(option) = self.prompt_bounded("Enter option", 0, menu.max_option())? else {
                return Ok(Flow::Closed);
            };

            let report = match option {
                sub_options::LIST => render(&inventory.list(), ALL_ITEMS_CAPTION),
                sub_options::QUANTITIES => {
                    writeln!(
                        self.output,
                        "\nShows items with lower quantities than specified by the user."
                    )?;
                    let Some(threshold) = self.prompt_long("Enter quantity")? else {
                        return Ok(Flow::Closed);
                    };
                    render(
                        &inventory.filter_by_minimum_quantity(threshold),
                        INSUFFICIENT_QUANTITY_CAPTION,
                    )
                }
                sub_options::EXPIRES | sub_options::SOON_TO_EXPIRE => {
                    let Some(due) = self.prompt_date()? else {
                        return Ok(Flow::Closed);
                    };
                    let entries = if option == sub_options::EXPIRES {
                        inventory.filter_expired_by(due)
                    } else {
                        inventory.filter_soon_to_expire(due)
                    };
                    render(&entries, &not_expired_caption(due))
                }
                _ => return Ok(Flow::Continue),
            };

            writeln!(self.output, "{report}")?;
        }
    }

    fn prompt_bounded(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<Option<i64>> {
        writeln!(self.output, "{prompt}: ")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_bounded_int(&line, min, max) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn prompt_long(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        writeln!(self.output, "{prompt}: ")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_long(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn prompt_date(&mut self) -> io::Result<Option<NaiveDate>> {
        loop {
            let Some(year) = self.prompt_bounded("Enter year", MIN_YEAR, MAX_YEAR)? else {
                return Ok(None);
            };
            let Some(month) = self.prompt_bounded("Enter month", 1, 12)? else {
                return Ok(None);
            };

            // Both are within i32/u32 range after the bounded prompts.
            let last_day = last_day_of_month(year as i32, month as u32);
            let Some(day) =
                self.prompt_bounded("Enter day of month", 1, i64::from(last_day))?
            else {
                return Ok(None);
            };

            match due_date(year, month, day) {
                Ok(date) => return Ok(Some(date)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Next input line without its line terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
