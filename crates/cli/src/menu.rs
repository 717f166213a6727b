//! Boxed console menus.

/// Inner width of a menu box (between the two `*` borders).
pub const MENU_LINE_WIDTH: usize = 35;

pub mod main_options {
    pub const QUIT: i64 = 0;
    pub const LOAD: i64 = 1;
    pub const ABOUT: i64 = 2;
}

pub mod sub_options {
    pub const MAIN_MENU: i64 = 0;
    pub const LIST: i64 = 1;
    pub const QUANTITIES: i64 = 2;
    pub const EXPIRES: i64 = 3;
    pub const SOON_TO_EXPIRE: i64 = 4;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    options: Vec<(&'static str, i64)>,
}

impl Menu {
    pub fn main() -> Self {
        Self {
            title: "WAREHOUSE SYSTEM".to_string(),
            options: vec![
                ("LOAD FILE", main_options::LOAD),
                ("ABOUT", main_options::ABOUT),
                ("QUIT", main_options::QUIT),
            ],
        }
    }

    /// Sub menu for a loaded file, titled with its upper-cased name.
    pub fn sub(file_name: &str) -> Self {
        Self {
            title: file_name.trim().to_uppercase(),
            options: vec![
                ("ITEM LIST", sub_options::LIST),
                ("INSUFFICIENT QUANTITIES", sub_options::QUANTITIES),
                ("EXPIRED ITEMS", sub_options::EXPIRES),
                ("SOON TO EXPIRE ITEMS", sub_options::SOON_TO_EXPIRE),
                ("MAIN MENU", sub_options::MAIN_MENU),
            ],
        }
    }

    /// Highest option number; valid choices are `0..=max_option()`.
    pub fn max_option(&self) -> i64 {
        self.options.iter().map(|(_, number)| *number).max().unwrap_or(0)
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            horizontal_line(),
            text_line(""),
            text_line(&self.title),
            text_line(""),
            text_line(""),
        ];
        lines.extend(
            self.options
                .iter()
                .map(|(label, number)| option_line(label, *number)),
        );
        lines.push(text_line(""));
        lines.push(horizontal_line());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn horizontal_line() -> String {
    "*".repeat(MENU_LINE_WIDTH + 2)
}

/// Centered text; anything wider than the box is cut off.
fn text_line(text: &str) -> String {
    let text: String = text.chars().take(MENU_LINE_WIDTH).collect();
    let len = text.chars().count();
    let left = (MENU_LINE_WIDTH - len) / 2;
    let right = MENU_LINE_WIDTH - len - left;
    format!("*{}{text}{}*", " ".repeat(left), " ".repeat(right))
}

fn option_line(option: &str, number: i64) -> String {
    let label = format!(" [{number}]");
    let len = option.chars().count();
    let gap = ((MENU_LINE_WIDTH.saturating_sub(len)) / 2)
        .saturating_sub(label.len())
        .max(1);
    let right = MENU_LINE_WIDTH.saturating_sub(len + gap + label.len());
    format!("*{label}{}{option}{}*", " ".repeat(gap), " ".repeat(right))
}
