use indicatif::{ProgressBar, ProgressStyle};

/// How the long passes report progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOptions {
  /// A `Finished i of n...` line is printed every `interval` steps. 0 disables the lines.
  pub interval: usize,
  pub visible: bool,
}

impl ProgressOptions {
  pub fn silent() -> Self {
    ProgressOptions { interval: 0, visible: false }
  }
}

impl Default for ProgressOptions {
  fn default() -> Self {
    ProgressOptions { interval: 50, visible: true }
  }
}

fn bar_template(label: &str) -> String {
  format!("[{:<5}] {{pos}}/{{len}} {{elapsed_precise}} {{wide_bar:.cyan/blue}} {{msg}}", label)
}

pub(crate) struct Progress {
  bar: ProgressBar,
  len: usize,
  options: ProgressOptions,
}

impl Progress {
  pub(crate) fn new(label: &str, len: usize, options: ProgressOptions) -> Self {
    let bar = if options.visible {
      ProgressBar::new(len as u64)
    } else {
      ProgressBar::hidden()
    };
    bar.set_style(
      ProgressStyle::with_template(&bar_template(label))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  "),
    );
    Progress { bar, len, options }
  }

  /// Called at the top of outer iteration `i`.
  pub(crate) fn step(&self, i: usize) {
    if self.options.interval > 0 && i % self.options.interval == 0 {
      self.line(format!("Finished {} of {}...", i, self.len));
    }
    self.inc();
  }

  pub(crate) fn inc(&self) {
    self.bar.inc(1);
  }

  pub(crate) fn line(&self, msg: String) {
    if !self.options.visible {
      return;
    }
    if self.bar.is_hidden() {
      println!("{}", msg);
    } else {
      self.bar.println(msg);
    }
  }

  pub(crate) fn finish(&self, msg: &'static str) {
    self.bar.finish_with_message(msg);
  }
}
