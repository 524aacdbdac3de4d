use super::*;

/// Re-enables the employee dropdown when dropped, however the holder exits.
pub(crate) struct SelectLock<'a> {
  page: &'a mut Page,
}

impl<'a> SelectLock<'a> {
  pub(crate) fn hold(page: &'a mut Page) -> Self {
    Self { page }
  }
}

impl Deref for SelectLock<'_> {
  type Target = Page;

  fn deref(&self) -> &Page {
    self.page
  }
}

impl DerefMut for SelectLock<'_> {
  fn deref_mut(&mut self) -> &mut Page {
    self.page
  }
}

impl Drop for SelectLock<'_> {
  fn drop(&mut self) {
    self.page.release_select();
  }
}
