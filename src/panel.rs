//! NFT detail panel: image geometry and the panel's content model
//!
//! All functions here are pure (no I/O, no side effects). Actions resolve to
//! [`PanelIntent`] values; navigating, opening URLs and sharing are left to
//! the platform layer.

use crate::style::ViewportInfo;
use crate::theme::{Color, Theme};

/// Vertical gap between floating panels
pub const FLOATING_PANELS_MARGIN: f32 = 20.0;

// ============================================================================
// Geometry
// ============================================================================

/// Size of the floating image panel in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDimensions {
    pub width: f32,
    pub height: f32,
}

/// Pixel size of an NFT preview image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDimensions {
    pub width: f32,
    pub height: f32,
}

impl ImageDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// width / height, `None` for degenerate sizes
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width > 0.0 && self.height > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}

/// Scale a panel to its content's aspect ratio within `max_height`.
///
/// The panel takes `desired_width` and the matching height (square when the
/// aspect ratio is unknown). When that height exceeds `max_height` the height
/// is clamped; a panel with an opaque background keeps its width, otherwise
/// the width shrinks to preserve the aspect ratio.
pub fn compute_panel_dimensions(
    aspect_ratio: Option<f32>,
    desired_width: f32,
    max_height: f32,
    opaque_background: bool,
) -> PanelDimensions {
    let height = match aspect_ratio {
        Some(aspect) => desired_width / aspect,
        None => desired_width,
    };

    if height <= max_height {
        return PanelDimensions {
            width: desired_width,
            height,
        };
    }

    let width = if opaque_background {
        desired_width
    } else {
        max_height * aspect_ratio.unwrap_or(1.0)
    };

    PanelDimensions {
        width,
        height: max_height,
    }
}

/// Height left for the image panel once the safe area, the sibling panel and
/// the panel margin are accounted for. Never negative.
pub fn max_image_height(viewport: &ViewportInfo, sibling_height: f32) -> f32 {
    let insets = viewport.safe_area;
    let vertical_padding = if insets.bottom > 0.0 {
        insets.bottom + insets.top
    } else {
        insets.top * 2.0
    };
    let available = viewport.height - vertical_padding - sibling_height - FLOATING_PANELS_MARGIN;
    available.max(0.0)
}

// ============================================================================
// Content model
// ============================================================================

/// A trait (attribute) of a unique token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTrait {
    pub trait_type: String,
    pub value: String,
}

/// A unique token (NFT) as shown in the detail panel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UniqueToken {
    pub id: String,
    pub name: Option<String>,
    pub contract_name: String,
    /// Opaque background color behind the image, if the collection has one
    pub background: Option<Color>,
    pub permalink: Option<String>,
    pub image_url: Option<String>,
    pub image_dimensions: Option<ImageDimensions>,
    pub traits: Vec<TokenTrait>,
    pub is_sendable: bool,
}

/// A page of the panel pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPage {
    Image,
    Attributes,
}

/// A row in the action panel below the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Send,
    ViewOnOpenSea,
    Share,
}

/// What the platform layer should do for an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelIntent {
    OpenSendSheet,
    OpenUrl(String),
    Share { title: String, url: Option<String> },
}

impl PanelAction {
    pub fn label(self) -> &'static str {
        match self {
            PanelAction::Send => "Send to...",
            PanelAction::ViewOnOpenSea => "View on OpenSea",
            PanelAction::Share => "Share",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PanelAction::Send => "send",
            PanelAction::ViewOnOpenSea => "compass",
            PanelAction::Share => "share",
        }
    }

    /// Intent for this action; viewing a token without a permalink does nothing
    pub fn intent(self, token: &UniqueToken) -> Option<PanelIntent> {
        match self {
            PanelAction::Send => Some(PanelIntent::OpenSendSheet),
            PanelAction::ViewOnOpenSea => {
                tracing::info!("View token {} #{} on OpenSea", token.contract_name, token.id);
                token.permalink.clone().map(PanelIntent::OpenUrl)
            }
            PanelAction::Share => Some(PanelIntent::Share {
                title: format!("Share {} Info", token.title()),
                url: token.permalink.clone(),
            }),
        }
    }
}

impl UniqueToken {
    /// Token name, or `"{contract} #{id}"` for unnamed tokens
    pub fn title(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("{} #{}", self.contract_name, self.id),
        }
    }

    /// `"{contract} #{id}"` under a named token, the bare contract otherwise
    pub fn subtitle(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => format!("{} #{}", self.contract_name, self.id),
            _ => self.contract_name.clone(),
        }
    }

    pub fn panel_color(&self, theme: &Theme) -> Color {
        self.background.unwrap_or(theme.palette.lightest_grey)
    }

    pub fn pages(&self) -> Vec<PanelPage> {
        let mut pages = vec![PanelPage::Image];
        if !self.traits.is_empty() {
            pages.push(PanelPage::Attributes);
        }
        pages
    }

    pub fn actions(&self) -> Vec<PanelAction> {
        let mut actions = Vec::with_capacity(3);
        if self.is_sendable {
            actions.push(PanelAction::Send);
        }
        actions.push(PanelAction::ViewOnOpenSea);
        actions.push(PanelAction::Share);
        actions
    }
}

/// Resolved layout of the NFT detail panel for one render
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPanelLayout {
    pub title: String,
    pub subtitle: String,
    pub color: Color,
    /// `None` when there is no room for the image panel
    pub image: Option<PanelDimensions>,
    pub pages: Vec<PanelPage>,
    pub actions: Vec<PanelAction>,
}

impl TokenPanelLayout {
    /// Lay out the panel for `token` given the measured height of the action
    /// panel below it
    pub fn resolve(
        token: &UniqueToken,
        viewport: &ViewportInfo,
        theme: &Theme,
        panel_width: f32,
        sibling_height: f32,
    ) -> Self {
        let max_height = max_image_height(viewport, sibling_height);
        let image = (max_height > 0.0).then(|| {
            compute_panel_dimensions(
                token.image_dimensions.and_then(|d| d.aspect_ratio()),
                panel_width,
                max_height,
                token.background.is_some(),
            )
        });

        Self {
            title: token.title(),
            subtitle: token.subtitle(),
            color: token.panel_color(theme),
            image,
            pages: token.pages(),
            actions: token.actions(),
        }
    }
}
