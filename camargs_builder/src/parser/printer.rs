use terminal_size::{terminal_size, Width};

use crate::api::{Alias, Opt, Positional};
use crate::constant::*;
use crate::model::Kind;
use crate::parser::interface::{ColumnRenderer, UserInterface};

// The help message view of an option.
pub(crate) struct OptionParameter {
    name: Option<String>,
    short: Option<char>,
    aliases: Vec<Alias>,
    kind: Kind,
    help: Option<String>,
}

impl From<&Opt> for OptionParameter {
    fn from(value: &Opt) -> Self {
        Self {
            name: value.name().map(str::to_string),
            short: value.short_name(),
            aliases: value.aliases().to_vec(),
            kind: value.kind(),
            help: value.description().map(str::to_string),
        }
    }
}

impl OptionParameter {
    fn shadows_long(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
            || self.aliases.contains(&Alias::Long(name.to_string()))
    }

    fn shadows_short(&self, short: char) -> bool {
        self.short == Some(short) || self.aliases.contains(&Alias::Short(short))
    }

    // Ex: "-f, --flag FLAG", "--flag FLAG", "-f STRING", "-f".
    fn flags(&self) -> String {
        let mut forms = Vec::default();

        if let Some(short) = self.short {
            forms.push(format!("-{short}"));
        }

        if let Some(name) = &self.name {
            forms.push(format!("--{name}"));
        }

        let grammar = if self.kind.takes_value() {
            match &self.name {
                Some(name) => format!(" {}", name.to_ascii_uppercase().replace('-', "_")),
                None => format!(" {}", self.kind.metavar()),
            }
        } else {
            "".to_string()
        };

        format!("{}{grammar}", forms.join(", "))
    }

    fn description(&self) -> String {
        let mut description = self.help.clone().unwrap_or_default();

        if !self.aliases.is_empty() {
            let aliases = self
                .aliases
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(", ");

            if !description.is_empty() {
                description.push(' ');
            }

            description.push_str(&format!("(aliases: {aliases})"));
        }

        description
    }
}

// The help message view of a positional argument.
pub(crate) struct ArgumentParameter {
    name: String,
    required: bool,
    help: Option<String>,
}

impl From<&Positional> for ArgumentParameter {
    fn from(value: &Positional) -> Self {
        Self {
            name: value.name().to_string(),
            required: value.is_required(),
            help: value.description().map(str::to_string),
        }
    }
}

impl ArgumentParameter {
    fn grammar(&self) -> String {
        if self.required {
            self.name.clone()
        } else {
            format!("[{}]", self.name)
        }
    }
}

pub(crate) struct Printer {
    about: Option<String>,
    options: Vec<OptionParameter>,
    arguments: Vec<ArgumentParameter>,
    terminal_width: Option<usize>,
}

// The description width when there is no terminal to guide the layout.
const DEFAULT_MIDDLE_WIDTH: usize = 40;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(None, Vec::default(), Vec::default(), None)
    }

    pub(crate) fn terminal(
        about: Option<String>,
        options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(about, options, arguments, terminal_width)
    }

    pub(crate) fn new(
        about: Option<String>,
        options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            about,
            options,
            arguments,
            terminal_width,
        }
    }

    // The built-in help entry, limited to the forms not shadowed by a declared option.
    fn help_flags(&self) -> Option<String> {
        let short = !self.options.iter().any(|o| o.shadows_short(HELP_SHORT));
        let long = !self.options.iter().any(|o| o.shadows_long(HELP_NAME));

        match (short, long) {
            (true, true) => Some(format!("-{HELP_SHORT}, --{HELP_NAME}")),
            (true, false) => Some(format!("-{HELP_SHORT}")),
            (false, true) => Some(format!("--{HELP_NAME}")),
            (false, false) => None,
        }
    }

    pub(crate) fn print_help(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        let mut option_lines: Vec<(String, String)> = Vec::default();

        if let Some(help_flags) = self.help_flags() {
            option_lines.push((help_flags, HELP_MESSAGE.to_string()));
        }

        for option in &self.options {
            option_lines.push((option.flags(), option.description()));
        }

        let argument_lines: Vec<(String, String)> = self
            .arguments
            .iter()
            .map(|a| (a.name.clone(), a.help.clone().unwrap_or_default()))
            .collect();

        let left_column_width = option_lines
            .iter()
            .chain(argument_lines.iter())
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or(1);
        let middle_column_width = option_lines
            .iter()
            .chain(argument_lines.iter())
            .map(|(_, middle)| middle.chars().count() + MAIN_INDENT)
            .max()
            .unwrap_or(2);

        let column_renderer = match self.terminal_width {
            Some(total) => ColumnRenderer::new(
                PADDING_WIDTH,
                left_column_width.max(1),
                middle_column_width.max(2),
            )
            .map(|renderer| renderer.fit(total)),
            None => ColumnRenderer::new(
                PADDING_WIDTH,
                left_column_width.max(1),
                middle_column_width.min(DEFAULT_MIDDLE_WIDTH).max(2),
            ),
        }
        .expect("internal error - column widths must be renderable");

        let mut summary = vec![program.to_string()];

        if !self.options.is_empty() {
            summary.push(OPTIONS_PLACEHOLDER.to_string());
        }

        summary.extend(self.arguments.iter().map(ArgumentParameter::grammar));
        user_interface.print(format!("usage: {}", summary.join(" ")));

        if !argument_lines.is_empty() {
            user_interface.print("".to_string());
            user_interface.print("positional arguments:".to_string());

            for (grammar, help) in &argument_lines {
                for line in column_renderer.render(MAIN_INDENT, grammar, help) {
                    user_interface.print(line);
                }
            }
        }

        if !option_lines.is_empty() {
            user_interface.print("".to_string());
            user_interface.print("options:".to_string());

            for (flags, description) in &option_lines {
                for line in column_renderer.render(MAIN_INDENT, flags, description) {
                    user_interface.print(line);
                }
            }
        }

        if let Some(about) = &self.about {
            user_interface.print("".to_string());
            user_interface.print(about.clone());
        }
    }
}

/// The Cli tokens of a failed parse, displayed with a caret under the offending token.
///
/// An error detected after the final token points just past the end of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    index: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(index: usize, tokens: &[&str]) -> Self {
        Self {
            index,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let column: usize = self
            .tokens
            .iter()
            .take(self.index)
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(f, "{projection}\n{:column$}^", "")
    }
}
