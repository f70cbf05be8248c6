use std::ops::Range;

/// Cursor and scroll window over a filtered list.
///
/// For a non-empty list of length `n` the following always hold:
/// `cursor < n`, `offset <= cursor` and `cursor < offset + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cursor: usize,
    offset: usize,
    height: usize,
}

impl Viewport {
    /// `height` is the number of visible rows; it is clamped to at least one.
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            height: height.max(1),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// One past the last visible row for a list of `len` items.
    #[must_use]
    pub fn visible_end(&self, len: usize) -> usize {
        self.offset.saturating_add(self.height).min(len)
    }

    #[must_use]
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        self.offset.min(len)..self.visible_end(len)
    }

    /// Moves the cursor by `delta` rows, scrolling the window when the cursor
    /// leaves it. No-op on an empty list or a zero delta.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 || delta == 0 {
            return;
        }

        let step = delta.unsigned_abs();

        if delta > 0 {
            self.cursor = self.cursor.saturating_add(step).min(len.saturating_sub(1));

            let end = self.visible_end(len);
            if self.cursor >= end {
                // Land on the first row below the window and scroll by `step`.
                self.cursor = end;
                self.offset = end.saturating_add(step).saturating_sub(self.height);
            }
        } else {
            self.cursor = self.cursor.saturating_sub(step);
        }

        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
    }

    pub fn line_down(&mut self, len: usize) {
        self.move_by(1, len);
    }

    pub fn line_up(&mut self, len: usize) {
        self.move_by(-1, len);
    }

    pub fn page_down(&mut self, len: usize) {
        self.move_by(self.page(), len);
    }

    pub fn page_up(&mut self, len: usize) {
        self.move_by(self.page().saturating_neg(), len);
    }

    fn page(&self) -> isize {
        isize::try_from(self.height).unwrap_or(isize::MAX)
    }
}
