use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressStyle};

/// Build the file-count progress bar drawn on stderr. `quiet` yields a hidden
/// bar; indicatif also skips drawing when stderr is not a terminal.
pub fn progress_bar(total_files: u64, quiet: bool) -> Result<ProgressBar, TemplateError> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(total_files);
    bar.set_style(
        ProgressStyle::with_template(
            "{msg:.bold} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {percent:>3}%",
        )?
        .progress_chars("=> "),
    );
    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_bar_is_hidden() {
        let bar = progress_bar(10, true).unwrap();
        assert!(bar.is_hidden());
    }

    #[test]
    fn bar_tracks_total() {
        let bar = progress_bar(50, false).unwrap();
        assert_eq!(bar.length(), Some(50));
    }
}
