//! Click actions attached to hyperlinks.

/// What clicking a link does, chosen by the prefix of its target.
///
/// | Target | Action |
/// |---|---|
/// | `comm:<command>` | run `/<command>` |
/// | `page:<n>` | turn to page `n` of the open book |
/// | `book:<path>` | open another book |
/// | anything else | open the target as a URL |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    RunCommand(String),
    ChangePage(String),
    OpenBook(String),
    OpenUrl(String),
}

impl ClickAction {
    /// Pick the action for a hyperlink target.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::ClickAction;
    ///
    /// assert_eq!(
    ///     ClickAction::from_target("page:3"),
    ///     ClickAction::ChangePage("3".to_string())
    /// );
    /// ```
    pub fn from_target(target: &str) -> Self {
        if let Some(command) = target.strip_prefix("comm:") {
            ClickAction::RunCommand(command.to_string())
        } else if let Some(page) = target.strip_prefix("page:") {
            ClickAction::ChangePage(page.to_string())
        } else if let Some(path) = target.strip_prefix("book:") {
            ClickAction::OpenBook(path.to_string())
        } else {
            ClickAction::OpenUrl(target.to_string())
        }
    }

    /// The chat command to run for this action, if it runs one.
    ///
    /// Opening a book is done through the `/info` command.
    pub fn command(&self) -> Option<String> {
        match self {
            ClickAction::RunCommand(command) => Some(format!("/{command}")),
            ClickAction::OpenBook(path) => Some(format!("/info {path}")),
            ClickAction::ChangePage(_) | ClickAction::OpenUrl(_) => None,
        }
    }
}
