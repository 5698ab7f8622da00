/// On-screen score readout. The text is rebuilt from the live score every
/// tick, with no change detection; it is cached only so the renderer can
/// borrow a ready string.
#[derive(Debug, Clone)]
pub struct ScoreBanner {
    pub text: String,
}

impl ScoreBanner {
    pub fn new() -> Self {
        let mut banner = Self {
            text: String::new(),
        };
        banner.update(0);
        banner
    }

    pub fn update(&mut self, score: u32) {
        self.text = format!("Score {score}");
    }
}

impl Default for ScoreBanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_starts_at_zero() {
        assert_eq!(ScoreBanner::new().text, "Score 0");
    }

    #[test]
    fn test_banner_tracks_score() {
        let mut banner = ScoreBanner::new();
        banner.update(300);
        assert_eq!(banner.text, "Score 300");
        banner.update(300);
        assert_eq!(banner.text, "Score 300");
    }
}
