//! Send-asset form
//!
//! Owner of the two amount bubble fields of the send sheet. The form keeps
//! the amounts of record, derives one from the other through the asset price
//! and re-renders both fields after every message, so an edit in one field
//! reaches the other through ordinary reconciliation.

use crate::field::{
    BubbleField, EntryConstraints, FieldMsg, FieldOutput, FieldProps, FieldView, TextSurface,
};
use crate::format::{self, FormatKind};
use crate::style::{Platform, RenderEnv};
use crate::theme::Color;

/// Inset of the selected-asset row from the screen edges (both sides)
pub const ROW_HORIZONTAL_INSET: f32 = 38.0;
/// Horizontal padding of the token form body
pub const FORM_HORIZONTAL_PADDING: f32 = 19.0;
pub const ROW_BORDER_RADIUS: f32 = 20.0;

/// Kind of asset being sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Token,
    Nft,
    /// Deposited (compound) savings
    Savings,
}

/// Row renderer used for the selected asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Coin,
    Collectible,
    SavingsCoin,
}

impl AssetKind {
    pub fn row_kind(self) -> RowKind {
        match self {
            AssetKind::Token => RowKind::Coin,
            AssetKind::Nft => RowKind::Collectible,
            AssetKind::Savings => RowKind::SavingsCoin,
        }
    }
}

/// The asset selected for sending
#[derive(Debug, Clone, PartialEq)]
pub struct SendableAsset {
    pub kind: AssetKind,
    pub symbol: String,
    pub address: Option<String>,
    /// Spendable balance as a decimal string
    pub balance: String,
    pub decimals: usize,
    /// Price in the native currency
    pub price: Option<f64>,
    /// Brand color of the asset, if known
    pub color: Option<Color>,
}

/// Drop shadow `(x, y, blur, color, opacity)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub x: f32,
    pub y: f32,
    pub blur: f32,
    pub color: Color,
    pub opacity: f32,
}

/// Resolved layout of the form for one render
#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    pub row_kind: RowKind,
    pub row_width: f32,
    pub row_shadows: Vec<Shadow>,
    pub row_gradient: bool,
    /// Tiny devices let the row overflow instead of clipping
    pub row_overflow_visible: bool,
    pub form_horizontal_padding: f32,
    /// iOS reserves space for the keyboard under token forms
    pub keyboard_spacer: bool,
    /// Color of the row's chevron glyph
    pub accent_color: Color,
}

impl FormLayout {
    pub fn resolve(asset: &SendableAsset, env: &RenderEnv) -> Self {
        let tiny = env.viewport.tier().is_tiny();
        let is_nft = asset.kind == AssetKind::Nft;
        let shadow = env.theme.palette.shadow;

        let row_shadows = if tiny {
            Vec::new()
        } else {
            vec![
                Shadow {
                    x: 0.0,
                    y: 10.0,
                    blur: 30.0,
                    color: shadow,
                    opacity: 0.12,
                },
                Shadow {
                    x: 0.0,
                    y: 5.0,
                    blur: 15.0,
                    color: shadow,
                    opacity: 0.06,
                },
            ]
        };

        Self {
            row_kind: asset.kind.row_kind(),
            row_width: (env.viewport.width - ROW_HORIZONTAL_INSET).max(0.0),
            row_shadows,
            row_gradient: !tiny,
            row_overflow_visible: tiny,
            form_horizontal_padding: if is_nft { 0.0 } else { FORM_HORIZONTAL_PADDING },
            keyboard_spacer: !is_nft && env.viewport.platform == Platform::Ios,
            accent_color: asset.color.unwrap_or(env.theme.palette.dark),
        }
    }
}

/// Inbound messages of the send form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendFormMsg {
    AssetField(FieldMsg),
    NativeField(FieldMsg),
    /// The selected-asset row was tapped
    ResetAssetSelection,
}

/// Notifications for the screen hosting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendFormOutput {
    AssetAmountChanged(String),
    NativeAmountChanged(String),
    ResetAssetSelection,
}

/// The two amount inputs of a fungible-asset form
struct AmountFields<S: TextSurface> {
    asset: BubbleField<S>,
    native: BubbleField<S>,
}

/// Send form for one selected asset.
pub struct SendAssetForm<S: TextSurface> {
    asset: SendableAsset,
    native_currency: String,
    asset_amount: String,
    native_amount: String,
    fields: Option<AmountFields<S>>,
    env: RenderEnv,
}

impl<S: TextSurface> SendAssetForm<S> {
    /// Build the form. NFTs get no amount fields; `make_surface` is called
    /// once per field otherwise.
    pub fn new(
        asset: SendableAsset,
        native_currency: impl Into<String>,
        env: RenderEnv,
        mut make_surface: impl FnMut() -> S,
    ) -> Self {
        let fields = match asset.kind {
            AssetKind::Nft => None,
            AssetKind::Token | AssetKind::Savings => {
                let color = asset.color.unwrap_or(env.theme.palette.dark);
                let asset_props = FieldProps::new()
                    .with_format(FormatKind::Decimal {
                        max_decimals: asset.decimals,
                    })
                    .with_constraints(EntryConstraints::decimal())
                    .with_auto_focus(true)
                    .with_button_label("Max")
                    .with_placeholder("0")
                    .with_test_id("selected-asset-field")
                    .with_asset_color(color);
                let native_props = FieldProps::new()
                    .with_format(FormatKind::Fiat)
                    .with_constraints(EntryConstraints::decimal())
                    .with_button_label("Max")
                    .with_placeholder("0.00")
                    .with_test_id("selected-asset-quantity-field")
                    .with_asset_color(color)
                    .with_max_label_color(true);
                Some(AmountFields {
                    asset: BubbleField::new("", asset_props, make_surface()),
                    native: BubbleField::new("", native_props, make_surface()),
                })
            }
        };

        Self {
            asset,
            native_currency: native_currency.into(),
            asset_amount: String::new(),
            native_amount: String::new(),
            fields,
            env,
        }
    }

    pub fn asset(&self) -> &SendableAsset {
        &self.asset
    }

    pub fn native_currency(&self) -> &str {
        &self.native_currency
    }

    pub fn is_nft(&self) -> bool {
        self.asset.kind == AssetKind::Nft
    }

    pub fn asset_amount(&self) -> &str {
        &self.asset_amount
    }

    pub fn native_amount(&self) -> &str {
        &self.native_amount
    }

    pub fn asset_field(&self) -> Option<&BubbleField<S>> {
        self.fields.as_ref().map(|f| &f.asset)
    }

    pub fn native_field(&self) -> Option<&BubbleField<S>> {
        self.fields.as_ref().map(|f| &f.native)
    }

    pub fn layout(&self) -> FormLayout {
        FormLayout::resolve(&self.asset, &self.env)
    }

    /// Replace the environment after a layout or theme change
    pub fn set_env(&mut self, env: RenderEnv) {
        self.env = env;
    }

    /// Handle a message, then re-render both fields with the amounts of record
    pub fn update(&mut self, msg: SendFormMsg) -> Option<SendFormOutput> {
        let output = match msg {
            SendFormMsg::ResetAssetSelection => Some(SendFormOutput::ResetAssetSelection),
            SendFormMsg::AssetField(msg) => {
                let field_output = self.fields.as_mut()?.asset.update(msg);
                match field_output {
                    Some(FieldOutput::Changed(value)) => {
                        self.on_change_asset_amount(value);
                        Some(SendFormOutput::AssetAmountChanged(self.asset_amount.clone()))
                    }
                    Some(FieldOutput::ButtonPressed(_)) => {
                        self.send_max_balance();
                        Some(SendFormOutput::AssetAmountChanged(self.asset_amount.clone()))
                    }
                    _ => None,
                }
            }
            SendFormMsg::NativeField(msg) => {
                let field_output = self.fields.as_mut()?.native.update(msg);
                match field_output {
                    Some(FieldOutput::Changed(value)) => {
                        self.on_change_native_amount(value);
                        Some(SendFormOutput::NativeAmountChanged(self.native_amount.clone()))
                    }
                    Some(FieldOutput::ButtonPressed(_)) => {
                        self.send_max_balance();
                        Some(SendFormOutput::AssetAmountChanged(self.asset_amount.clone()))
                    }
                    _ => None,
                }
            }
        };

        self.render();
        output
    }

    /// Render both fields with the current amounts. `None` for NFT forms.
    pub fn render(&mut self) -> Option<(FieldView, FieldView)> {
        let fields = self.fields.as_mut()?;
        let asset_view = fields.asset.render(&self.asset_amount, &self.env);
        let native_view = fields.native.render(&self.native_amount, &self.env);
        Some((asset_view, native_view))
    }

    fn on_change_asset_amount(&mut self, value: String) {
        self.native_amount = match (value.parse::<f64>(), self.asset.price) {
            (Ok(amount), Some(price)) if price > 0.0 => {
                let native = amount * price;
                if native.is_finite() {
                    format!("{:.2}", native)
                } else {
                    String::new()
                }
            }
            _ => String::new(),
        };
        tracing::debug!(
            "asset amount {:?} {} → {:?} {}",
            value,
            self.asset.symbol,
            self.native_amount,
            self.native_currency
        );
        self.asset_amount = value;
    }

    fn on_change_native_amount(&mut self, value: String) {
        self.asset_amount = match (value.parse::<f64>(), self.asset.price) {
            (Ok(native), Some(price)) if price > 0.0 => {
                format::trimmed_amount(native / price, self.asset.decimals)
            }
            _ => String::new(),
        };
        tracing::debug!(
            "native amount {:?} {} → {:?} {}",
            value,
            self.native_currency,
            self.asset_amount,
            self.asset.symbol
        );
        self.native_amount = value;
    }

    fn send_max_balance(&mut self) {
        let max = format::decimal_amount(&self.asset.balance, self.asset.decimals);
        tracing::debug!("send max balance {} {}", max, self.asset.symbol);
        self.on_change_asset_amount(max);
    }
}
