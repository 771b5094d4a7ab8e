/// Viewport width classes, narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Breakpoint {
    /// Up to 479px
    Xs,
    /// 480px to 719px
    S,
    /// 720px to 959px
    M,
    /// 960px to 1439px
    L,
    /// 1440px to 1919px
    Xl,
    /// 1920px and wider
    #[default]
    Xxl,
}

impl Breakpoint {
    /// Short name used for CSS classes.
    pub fn code(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::S => "s",
            Breakpoint::M => "m",
            Breakpoint::L => "l",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }

    /// Media query matching exactly this bucket.
    pub fn media_query(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "(max-width: 479px)",
            Breakpoint::S => "(min-width: 480px) and (max-width: 719px)",
            Breakpoint::M => "(min-width: 720px) and (max-width: 959px)",
            Breakpoint::L => "(min-width: 960px) and (max-width: 1439px)",
            Breakpoint::Xl => "(min-width: 1440px) and (max-width: 1919px)",
            Breakpoint::Xxl => "(min-width: 1920px)",
        }
    }

    /// Classifies a viewport width in CSS pixels.
    pub fn for_width(width: u32) -> Self {
        match width {
            0..=479 => Breakpoint::Xs,
            480..=719 => Breakpoint::S,
            720..=959 => Breakpoint::M,
            960..=1439 => Breakpoint::L,
            1440..=1919 => Breakpoint::Xl,
            _ => Breakpoint::Xxl,
        }
    }

    /// Number of x-axis labels to skip between shown labels.
    pub fn label_interval(&self) -> u32 {
        match self {
            Breakpoint::Xs => 3,
            Breakpoint::S => 2,
            Breakpoint::M => 1,
            Breakpoint::L | Breakpoint::Xl | Breakpoint::Xxl => 0,
        }
    }

    /// All buckets, narrowest first.
    pub fn all() -> &'static [Breakpoint] {
        &[
            Breakpoint::Xs,
            Breakpoint::S,
            Breakpoint::M,
            Breakpoint::L,
            Breakpoint::Xl,
            Breakpoint::Xxl,
        ]
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Tracks the active breakpoint from media-query change notifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakpointDetector {
    current: Breakpoint,
}

impl BreakpointDetector {
    /// Starts at the widest bucket until the environment reports otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    /// Applies one media-query transition. Only activations move the state.
    pub fn handle_change(&mut self, bucket: Breakpoint, matches: bool) {
        if matches {
            self.current = bucket;
        }
    }
}
