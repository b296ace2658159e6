use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressStyle};

/// A progress bar for work with a known number of steps.
pub fn default_bounded_progress_bar(msg: impl Into<Cow<'static, str>>, len: u64) -> ProgressBar {
    let progress_bar_style = ProgressStyle::default_bar()
        .template(
            "{msg} ... [{elapsed_precise}] [{bar:40.white/white}] {human_pos}/{human_len} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let progress_bar = ProgressBar::new(len);
    progress_bar.set_style(progress_bar_style);
    progress_bar.set_message(msg);

    progress_bar
}

/// A spinner for work of unknown length.
pub fn default_unbounded_progress_bar(msg: impl Into<Cow<'static, str>>) -> ProgressBar {
    let progress_bar_style = ProgressStyle::default_spinner()
        .template("{msg} ... [{elapsed_precise}] {human_pos}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(progress_bar_style);
    progress_bar.set_message(msg);

    progress_bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_progress_bar() {
        let progress_bar = default_bounded_progress_bar("Counting", 10);
        progress_bar.inc(3);

        assert_eq!(progress_bar.length(), Some(10));
        assert_eq!(progress_bar.position(), 3);
        assert_eq!(progress_bar.message(), "Counting");
    }

    #[test]
    fn test_unbounded_progress_bar() {
        let progress_bar = default_unbounded_progress_bar("Reading");
        progress_bar.inc(5);

        assert_eq!(progress_bar.length(), None);
        assert_eq!(progress_bar.position(), 5);
    }
}
