use crate::api::{Opt, Positional};
use crate::constant::*;
use crate::matcher::cursor::TokenCursor;
use crate::matcher::model::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Walks the Cli tokens, dispatching each onto the declarations it matches.
///
/// The matcher holds no state beyond a single `consume`.
pub(crate) struct Matcher<'m, 'a> {
    options: &'m mut [&'a mut Opt],
    positionals: &'m mut [&'a mut Positional],
    // The number of positional arguments bound so far.
    filled: usize,
}

impl<'m, 'a> Matcher<'m, 'a> {
    pub(crate) fn new(
        options: &'m mut [&'a mut Opt],
        positionals: &'m mut [&'a mut Positional],
    ) -> Self {
        Self {
            options,
            positionals,
            filled: 0,
        }
    }

    /// Match all of the `tokens` (where `tokens[0]` is the program name).
    ///
    /// Errors are paired with the index of the offending token.
    /// Errors detected after the final token use the index `tokens.len()`.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Action, (usize, ParseError)> {
        let mut cursor = TokenCursor::new(tokens);

        // Index 0 is never matched.
        while cursor.has_next() {
            cursor.advance();
            let token = match cursor.current() {
                Some(token) => token,
                None => break,
            };

            // 1. Find a 'long' option, such as:
            //  --first
            //  --first ..
            // 2. Find a 'short' option cluster, such as (-t and -s are example short names):
            //  -t
            //  -s ..
            //  -ts ..
            // 3. Otherwise bind a positional argument (this includes the lone '-').
            let step = if let Some(name) = token.strip_prefix("--") {
                self.match_long(name, &mut cursor)
            } else if let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) {
                self.match_short(cluster, &mut cursor)
            } else {
                self.match_positional(token)
            };

            match step.map_err(|error| (cursor.index(), error))? {
                Step::Continue => {}
                Step::Help => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Help requested at token {}.", cursor.index());
                    }

                    return Ok(Action::PrintHelp);
                }
            }
        }

        self.close(tokens.len())
    }

    fn match_long(&mut self, name: &str, cursor: &mut TokenCursor) -> Result<Step, ParseError> {
        // The first registered option wins.
        match self.options.iter_mut().find(|o| o.matches_long(name)) {
            Some(option) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Long option '--{name}' matched {}.", option.display_name());
                }

                option.matched();

                if option.kind().takes_value() {
                    take_value(option, &format!("--{name}"), cursor)?;
                }

                Ok(Step::Continue)
            }
            None if name == HELP_NAME => Ok(Step::Help),
            None => Err(ParseError::UnknownOption(name.to_string())),
        }
    }

    fn match_short(&mut self, cluster: &str, cursor: &mut TokenCursor) -> Result<Step, ParseError> {
        let length = cluster.chars().count();

        for (index, short) in cluster.chars().enumerate() {
            let last = index + 1 == length;

            match self.options.iter_mut().find(|o| o.matches_short(short)) {
                Some(option) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Short option '-{short}' matched {}.", option.display_name());
                    }

                    option.matched();

                    if option.kind().takes_value() {
                        // Only the final option of the cluster may take a value.
                        if !last {
                            return Err(ParseError::IncorrectUsage(format!("-{short}")));
                        }

                        take_value(option, &format!("-{short}"), cursor)?;
                    }
                }
                None if short == HELP_SHORT => return Ok(Step::Help),
                None => return Err(ParseError::UnknownShortOption(short)),
            }
        }

        Ok(Step::Continue)
    }

    fn match_positional(&mut self, token: &str) -> Result<Step, ParseError> {
        let positional = match self.positionals.get_mut(self.filled) {
            Some(positional) => positional,
            None => return Err(ParseError::UnknownPositional(token.to_string())),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' bound to positional '{}'.", positional.name());
        }

        positional
            .bind(token)
            .map_err(|source| ParseError::InvalidValue {
                name: positional.name().to_string(),
                source,
            })?;
        self.filled += 1;
        Ok(Step::Continue)
    }

    fn close(self, end: usize) -> Result<Action, (usize, ParseError)> {
        match self.positionals[self.filled..]
            .iter()
            .find(|p| p.is_required())
        {
            Some(positional) => Err((
                end,
                ParseError::MissingPositional(positional.name().to_string()),
            )),
            None => Ok(Action::Complete),
        }
    }
}

// Consume the token following the cursor as the option's value.
// Errors name the option as it was spelled on the Cli.
fn take_value(option: &mut Opt, spelling: &str, cursor: &mut TokenCursor) -> Result<(), ParseError> {
    match cursor.peek() {
        Some(candidate) if !candidate.starts_with('-') => {
            cursor.advance();
            option
                .capture(candidate)
                .map_err(|source| ParseError::InvalidValue {
                    name: spelling.to_string(),
                    source,
                })
        }
        _ => Err(ParseError::MissingValue(spelling.to_string())),
    }
}
