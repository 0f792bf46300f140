//! Viewport geometry for the focus list.
//!
//! Every item is one third of the visible height plus one pixel tall, so the
//! central slot sits exactly one item below the top padding.

/// Number of items that share the visible height.
pub const ITEMS_PER_VIEWPORT: i32 = 3;

/// Padding around the list content, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn all(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn vertical(top: i32, bottom: i32) -> Self {
        Self {
            top,
            bottom,
            ..Self::ZERO
        }
    }
}

/// Size, padding and clipping of the list's viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub width: i32,
    pub height: i32,
    pub padding: Padding,
    /// When false, content may draw into the padding and the top and bottom
    /// padding are evened out so the focus item stays centered.
    pub clip_to_padding: bool,
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ViewportGeometry {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding: Padding::ZERO,
            clip_to_padding: true,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_clip_to_padding(mut self, clip_to_padding: bool) -> Self {
        self.clip_to_padding = clip_to_padding;
        self
    }

    /// The larger of the raw top and bottom paddings.
    pub fn vertical_padding(&self) -> i32 {
        self.padding.top.max(self.padding.bottom)
    }

    pub fn padding_top(&self) -> i32 {
        if self.clip_to_padding {
            self.padding.top
        } else {
            self.vertical_padding()
        }
    }

    pub fn padding_bottom(&self) -> i32 {
        if self.clip_to_padding {
            self.padding.bottom
        } else {
            self.vertical_padding()
        }
    }

    pub fn padding_left(&self) -> i32 {
        self.padding.left
    }

    pub fn padding_right(&self) -> i32 {
        self.padding.right
    }

    /// Height available to the three item slots.
    pub fn visible_height(&self) -> i32 {
        let used = if self.clip_to_padding {
            self.padding.top + self.padding.bottom
        } else {
            self.vertical_padding() * 2
        };
        (self.height - used).max(0)
    }

    pub fn item_height(&self) -> i32 {
        self.visible_height() / ITEMS_PER_VIEWPORT + 1
    }

    /// Top of the slot that holds the focus item.
    pub fn centered_top(&self) -> i32 {
        self.padding_top() + self.item_height()
    }

    /// Lowest position the first slot's top may be dragged to.
    pub fn top_view_max_top(&self) -> i32 {
        self.centered_top()
    }

    /// Bottom edge that stops the layout pass from materializing more slots.
    pub fn parent_bottom(&self) -> i32 {
        self.height - self.padding_bottom()
    }

    pub fn content_left(&self) -> i32 {
        self.padding_left()
    }

    pub fn content_right(&self) -> i32 {
        self.width - self.padding_right()
    }

    /// Vertical center of the content box between the top and bottom
    /// padding; the centered slot straddles it.
    pub fn center_y(&self) -> i32 {
        (self.padding_top() + self.height - self.padding_bottom()) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
