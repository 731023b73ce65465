use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Aim for 95% of the terminal, leaving a margin on the right.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Room for three average (5 character) words.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Lays out a left column (the parameter names) next to a wrapped middle column (the description).
///
/// ```text
/// <indent><left><padding><middle>
///                        <middle, continued>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnRenderer {
    padding: usize,
    left: usize,
    middle: usize,
}

impl ColumnRenderer {
    /// A renderer with fixed column widths.
    ///
    /// Returns `None` unless the padding and left columns are at least 1 wide, and the middle column at least 2 wide (so a word may always be hyphenated).
    pub(crate) fn new(padding: usize, left: usize, middle: usize) -> Option<Self> {
        if padding == 0 || left == 0 || middle < 2 {
            return None;
        }

        Some(Self {
            padding,
            left,
            middle,
        })
    }

    /// Resize the middle column for a terminal `total` characters wide.
    ///
    /// The requested middle is kept when everything fits in the target width.
    /// Otherwise the middle shrinks into the remaining space, but never below [`MINIMUM_MIDDLE_WIDTH`].
    pub(crate) fn fit(self, total: usize) -> Self {
        let occupied = self.left + self.padding;
        let target = (total as f64 * TARGET_TOTAL_FACTOR) as usize;
        let requested = self.middle.max(MINIMUM_MIDDLE_WIDTH);

        let middle = if occupied + requested <= target {
            requested
        } else {
            total.saturating_sub(occupied).max(MINIMUM_MIDDLE_WIDTH)
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Fit columns {occupied}+{} into the total {total} (target {target}): middle {middle}.", self.middle);
        }

        Self { middle, ..self }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        assert!(
            left.chars().count() <= self.left,
            "internal error - left column overflow"
        );
        let width = self.left;
        let gutter = " ".repeat(self.padding);
        let lines = wrap(middle, self.middle.saturating_sub(indent).max(2));

        if lines.is_empty() {
            return vec![format!("{:indent$}{left}", "")];
        }

        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let name = if i == 0 { left } else { "" };
                format!("{:indent$}{name:width$}{gutter}{line}", "")
            })
            .collect()
    }
}

// Greedily fill lines up to `width` characters, hyphenating words which cannot fit on a line of their own.
fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        let length = current.chars().count();

        if length > 0 && length + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        }

        if length > 0 {
            lines.push(std::mem::take(&mut current));
        }

        current = split_word(word, width, &mut lines);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Emit `width - 1` character pieces (plus a '-') until the rest of the word fits, returning the rest.
fn split_word(word: &str, width: usize, lines: &mut Vec<String>) -> String {
    let characters: Vec<char> = word.chars().collect();
    let mut rest = characters.as_slice();

    while rest.len() > width {
        let (piece, tail) = rest.split_at(width - 1);
        lines.push(format!("{}-", piece.iter().collect::<String>()));
        rest = tail;
    }

    rest.iter().collect()
}

/// The sink for the parser's help and diagnostic output.
///
/// Implement this to redirect output somewhere other than the console.
pub trait UserInterface {
    /// Print a line of the help message.
    fn print(&self, message: String);

    /// Print a line of a diagnostic message.
    fn print_error(&self, message: String);

    /// Print the context of a diagnostic (the tokens with a caret under the offending one).
    fn print_error_context(&self, error_context: ErrorContext);
}

/// Prints the help message to stdout, and diagnostics to stderr.
#[derive(Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ErrorContext, UserInterface};
    use std::cell::RefCell;
    use std::sync::mpsc;

    pub(crate) struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
        error: RefCell<Option<Vec<String>>>,
        error_context: RefCell<Option<ErrorContext>>,
    }

    impl Default for InMemoryInterface {
        fn default() -> Self {
            Self {
                message: RefCell::new(None),
                error: RefCell::new(None),
                error_context: RefCell::new(None),
            }
        }
    }

    fn push(output: &RefCell<Option<Vec<String>>>, message: String) {
        let mut output = output.borrow_mut();

        match output.as_mut() {
            Some(messages) => messages.push(message),
            None => {
                output.replace(vec![message]);
            }
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            push(&self.message, message);
        }

        fn print_error(&self, message: String) {
            push(&self.error, message);
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once.
            self.error_context.borrow_mut().replace(error_context);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>, Option<ErrorContext>) {
            let InMemoryInterface {
                message,
                error,
                error_context,
            } = self;

            (
                message.take().map(|messages| messages.join("\n")),
                error.take().map(|messages| messages.join("\n")),
                error_context.take(),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap()
        }
    }

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let (error_context_tx, error_context_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            error_tx,
            error_context_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            error_rx,
            error_context_rx,
        };
        (sender, receiver)
    }

    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
        error_context_tx: mpsc::Sender<Option<ErrorContext>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            self.message_tx.send(None).unwrap();
            self.error_tx.send(None).unwrap();
            self.error_context_tx.send(None).unwrap();
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, with the receiver concatenating the messages.
            self.message_tx.send(Some(message)).unwrap();
        }

        fn print_error(&self, message: String) {
            self.error_tx.send(Some(message)).unwrap();
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once, with the receiver only taking the first.
            self.error_context_tx.send(Some(error_context)).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
        error_context_rx: mpsc::Receiver<Option<ErrorContext>>,
    }

    impl ReceiverInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>, Option<ErrorContext>) {
            let ReceiverInterface {
                message_rx,
                error_rx,
                error_context_rx,
            } = self;

            (
                drain(message_rx),
                drain(error_rx),
                // Take the first, when multiple were sent on the channel.
                error_context_rx.recv().unwrap(),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap()
        }
    }

    fn drain(receiver: mpsc::Receiver<Option<String>>) -> Option<String> {
        let mut values = Vec::default();

        while let Some(message) = receiver.recv().unwrap() {
            values.push(message);
        }

        if values.is_empty() {
            None
        } else {
            Some(values.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn renderer(padding: usize, left: usize, middle: usize) -> ColumnRenderer {
        ColumnRenderer::new(padding, left, middle).unwrap()
    }

    #[rstest]
    #[case("abc", "something", vec!["abc      something"])]
    #[case("abc", "  something  ", vec!["abc      something"])]
    #[case("abc12", "something pieces full", vec!["abc12    something pieces full"])]
    #[case("abc", "something pieces full more stuff", vec![
        "abc      something pieces full",
        "         more stuff",
    ])]
    #[case("abc", "something pieces fullest more stuff extra     ", vec![
        "abc      something pieces",
        "         fullest more stuff",
        "         extra",
    ])]
    #[case("abc", "somethingxpiecesxfuller", vec!["abc      somethingxpiecesxfuller"])]
    #[case("abc", "somethingxpiecesxfullerandthenwecontinueforalongtime", vec![
        "abc      somethingxpiecesxfulle-",
        "         randthenwecontinuefora-",
        "         longtime",
    ])]
    #[case("abc", "something pieces fullerandthenwecontinueforalongtime", vec![
        "abc      something pieces",
        "         fullerandthenwecontinu-",
        "         eforalongtime",
    ])]
    fn render(#[case] left: &str, #[case] middle: &str, #[case] expected: Vec<&str>) {
        // Setup
        let column_renderer = renderer(4, 5, 23);

        // Execute
        let lines = column_renderer.render(0, left, middle);

        // Verify
        assert_eq!(lines, expected);
    }

    #[test]
    fn render_multibyte() {
        // Setup
        let column_renderer = renderer(1, 1, 4);

        // Execute
        let lines = column_renderer.render(0, "a", "ééééé");

        // Verify
        assert_eq!(lines, vec!["a ééé-", "  éé"]);
    }

    #[test]
    fn render_middle_empty() {
        // Setup
        let column_renderer = renderer(4, 5, 8);

        // Execute & Verify
        assert_eq!(column_renderer.render(0, "abc", ""), vec!["abc"]);
        assert_eq!(column_renderer.render(1, "abc", "   "), vec![" abc"]);
    }

    #[test]
    fn render_indent() {
        // Setup
        let column_renderer = renderer(4, 5, 10);

        // Execute & Verify
        assert_eq!(
            column_renderer.render(1, "abc", "something"),
            vec![" abc      something"]
        );
        assert_eq!(
            column_renderer.render(1, "abc", "somethingx"),
            vec![" abc      somethin-", "          gx"]
        );
    }

    #[test]
    #[should_panic]
    fn render_left_overflow() {
        renderer(4, 5, 10).render(0, "abcdef", "something");
    }

    #[rstest]
    #[case(0, 1, 2)]
    #[case(1, 0, 2)]
    #[case(1, 1, 1)]
    fn new_invalid(#[case] padding: usize, #[case] left: usize, #[case] middle: usize) {
        assert_eq!(ColumnRenderer::new(padding, left, middle), None);
    }

    #[rstest]
    // Fits within the target total: the requested middle.
    #[case(10, 30, 100, 30)]
    // Fits within the total: the remaining space.
    #[case(10, 100, 50, 37)]
    // Does not fit at all: the minimum.
    #[case(60, 30, 50, MINIMUM_MIDDLE_WIDTH)]
    // Never below the minimum.
    #[case(10, 5, 100, MINIMUM_MIDDLE_WIDTH)]
    fn fit(
        #[case] left: usize,
        #[case] middle: usize,
        #[case] total: usize,
        #[case] expected: usize,
    ) {
        // Setup
        let column_renderer = renderer(3, left, middle);

        // Execute
        let fitted = column_renderer.fit(total);

        // Verify
        assert_eq!(fitted, renderer(3, left, expected));
    }
}
