/// Wrapping navigator over an owned list of slides.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    slides: Vec<T>,
    cur_idx: usize,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            cur_idx: 0,
        }
    }
}

impl<T> Carousel<T> {
    pub fn new(slides: Vec<T>) -> Self {
        Self { slides, cur_idx: 0 }
    }

    pub fn current(&self) -> Option<&T> {
        self.slides.get(self.cur_idx)
    }

    pub fn index(&self) -> usize {
        self.cur_idx
    }

    pub fn total(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn go_next(&mut self) -> Option<&T> {
        if self.slides.is_empty() {
            return None;
        }

        self.cur_idx = (self.cur_idx + 1) % self.slides.len();
        self.current()
    }

    pub fn go_prev(&mut self) -> Option<&T> {
        if self.slides.is_empty() {
            return None;
        }

        self.cur_idx = if self.cur_idx == 0 {
            self.slides.len() - 1
        } else {
            self.cur_idx - 1
        };

        self.current()
    }

    pub fn go_to(&mut self, idx: usize) -> Option<&T> {
        if idx < self.slides.len() {
            self.cur_idx = idx;
            self.current()
        } else {
            None
        }
    }
}
