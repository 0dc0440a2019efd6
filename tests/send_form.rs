//! Send form tests - amount conversion through the bubble field echo loop

use wallet_ui::field::{FieldMsg, MemorySurface, PressEvent};
use wallet_ui::send_form::{AssetKind, SendAssetForm, SendFormMsg, SendFormOutput, SendableAsset};
use wallet_ui::style::RenderEnv;

fn eth() -> SendableAsset {
    SendableAsset {
        kind: AssetKind::Token,
        symbol: "ETH".into(),
        address: Some("eth".into()),
        balance: "2.5".into(),
        decimals: 4,
        price: Some(2.0),
        color: None,
    }
}

fn form(asset: SendableAsset) -> SendAssetForm<MemorySurface> {
    let mut form = SendAssetForm::new(asset, "USD", RenderEnv::default(), MemorySurface::new);
    form.render();
    form
}

fn asset_text(form: &SendAssetForm<MemorySurface>) -> String {
    form.asset_field()
        .and_then(|f| f.surface().text())
        .unwrap_or_default()
        .to_string()
}

fn native_text(form: &SendAssetForm<MemorySurface>) -> String {
    form.native_field()
        .and_then(|f| f.surface().text())
        .unwrap_or_default()
        .to_string()
}

fn press() -> FieldMsg {
    FieldMsg::PressButton(PressEvent {
        label: Some("Max".into()),
    })
}

#[test]
fn test_asset_field_autofocuses() {
    let form = form(eth());
    let asset = form.asset_field().unwrap();
    assert!(asset.state().is_focused);
    assert!(asset.is_button_visible());
    assert!(!form.native_field().unwrap().state().is_focused);
}

#[test]
fn test_typing_asset_amount_updates_native() {
    let mut form = form(eth());

    let output = form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("1.5".into())));
    assert_eq!(output, Some(SendFormOutput::AssetAmountChanged("1.5".into())));
    assert_eq!(form.native_amount(), "3.00");
    assert_eq!(asset_text(&form), "1.5");
    assert_eq!(native_text(&form), "3.00");
}

#[test]
fn test_partial_input_is_not_stomped() {
    let mut form = form(eth());

    form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("1.".into())));
    assert_eq!(asset_text(&form), "1.");
    assert_eq!(native_text(&form), "2.00");
}

#[test]
fn test_decimals_limited_to_asset_decimals() {
    let mut form = form(eth());

    form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("0.123456".into())));
    assert_eq!(form.asset_amount(), "0.1234");
    assert_eq!(asset_text(&form), "0.1234");
}

#[test]
fn test_typing_native_amount_updates_asset() {
    let mut form = form(eth());

    // Move focus from the asset field to the native field
    form.update(SendFormMsg::AssetField(FieldMsg::Blur(Default::default())));
    form.update(SendFormMsg::NativeField(FieldMsg::Focus(Default::default())));

    let output = form.update(SendFormMsg::NativeField(FieldMsg::ChangeText("5".into())));
    assert_eq!(output, Some(SendFormOutput::NativeAmountChanged("5".into())));
    assert_eq!(form.asset_amount(), "2.5");
    assert_eq!(asset_text(&form), "2.5");
    assert_eq!(native_text(&form), "5");
}

#[test]
fn test_clearing_one_side_clears_the_other() {
    let mut form = form(eth());

    form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("1".into())));
    assert_eq!(native_text(&form), "2.00");

    form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("".into())));
    assert_eq!(form.native_amount(), "");
    assert_eq!(native_text(&form), "");
}

#[test]
fn test_max_button_on_focused_asset_field() {
    let mut form = form(eth());

    form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("1".into())));
    let output = form.update(SendFormMsg::AssetField(press()));

    assert_eq!(output, Some(SendFormOutput::AssetAmountChanged("2.5".into())));
    let asset = form.asset_field().unwrap();
    assert!(asset.state().is_focused);
    assert!(!asset.state().button_armed);
    assert_eq!(asset_text(&form), "2.5");
    assert_eq!(native_text(&form), "5.00");
}

#[test]
fn test_max_button_on_native_field() {
    let mut form = form(eth());

    form.update(SendFormMsg::AssetField(FieldMsg::Blur(Default::default())));
    form.update(SendFormMsg::NativeField(FieldMsg::Focus(Default::default())));
    form.update(SendFormMsg::NativeField(press()));

    assert_eq!(asset_text(&form), "2.5");
    assert_eq!(native_text(&form), "5.00");
    assert_eq!(form.native_field().unwrap().surface().focus_requests(), 1);
}

#[test]
fn test_no_price_leaves_native_empty() {
    let mut asset = eth();
    asset.price = None;
    let mut form = form(asset);

    form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("1".into())));
    assert_eq!(asset_text(&form), "1");
    assert_eq!(native_text(&form), "");
}

#[test]
fn test_nft_form_has_no_amount_fields() {
    let mut nft = eth();
    nft.kind = AssetKind::Nft;
    let mut form = form(nft);

    assert!(form.is_nft());
    assert!(form.asset_field().is_none());
    assert!(form.render().is_none());
    assert_eq!(
        form.update(SendFormMsg::AssetField(FieldMsg::ChangeText("1".into()))),
        None
    );
    assert_eq!(
        form.update(SendFormMsg::ResetAssetSelection),
        Some(SendFormOutput::ResetAssetSelection)
    );
}

#[test]
fn test_savings_uses_savings_row() {
    let mut savings = eth();
    savings.kind = AssetKind::Savings;
    let form = form(savings);

    assert_eq!(
        form.layout().row_kind,
        wallet_ui::send_form::RowKind::SavingsCoin
    );
    assert!(form.asset_field().is_some());
}

#[test]
fn test_native_to_asset_for_eighteen_decimal_asset() {
    let mut asset = eth();
    asset.decimals = 18;
    asset.price = Some(2000.0);
    let mut form = form(asset);

    form.update(SendFormMsg::AssetField(FieldMsg::Blur(Default::default())));
    form.update(SendFormMsg::NativeField(FieldMsg::Focus(Default::default())));
    form.update(SendFormMsg::NativeField(FieldMsg::ChangeText("200".into())));

    assert_eq!(form.asset_amount(), "0.1");
    assert_eq!(asset_text(&form), "0.1");
}

#[test]
fn test_overflowing_asset_amount_clears_native() {
    let mut form = form(eth());

    let huge = "9".repeat(400);
    form.update(SendFormMsg::AssetField(FieldMsg::ChangeText(huge.clone())));

    assert_eq!(form.asset_amount(), huge);
    assert_eq!(form.native_amount(), "");
    assert_eq!(native_text(&form), "");
}
