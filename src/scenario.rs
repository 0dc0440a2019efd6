//! Scenario replay for bubble fields
//!
//! A scenario is a YAML description of one field and a list of user and
//! owner actions. Replaying it drives a [`BubbleField`] over a
//! [`MemorySurface`] exactly as an owner would: apply the action, then
//! re-render with the owner's current value. Every step produces a
//! [`StepRecord`] and may carry expectations checked against it.
//!
//! ```yaml
//! name: max-button
//! field:
//!   value: "1"
//!   format: { kind: decimal, max_decimals: 4 }
//!   button_label: Max
//!   max_value: "2.5"
//! steps:
//!   - action: focus
//!   - action: press
//!     expect: { display: "2.5" }
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::field::{
    BubbleField, EntryConstraints, FieldCallbacks, FieldMsg, FieldProps, InputKind,
    MemorySurface, PressEvent, Reconciliation,
};
use crate::format::FormatKind;
use crate::style::{RenderEnv, ViewportInfo};
use crate::theme::Theme;
use crate::tracing::FieldSnapshot;

// ---------------------------------------------------------------------------
// Scenario YAML schema
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub viewport: Option<ViewportInfo>,
    #[serde(default)]
    pub field: FieldSpec,
    pub steps: Vec<Step>,
}

/// Field configuration and the owner's behavior
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldSpec {
    /// Owner's initial value
    pub value: String,
    pub format: FormatKind,
    pub auto_focus: bool,
    pub button_label: Option<String>,
    pub placeholder: Option<String>,
    pub max_length: Option<usize>,
    pub input_kind: InputKind,
    /// Owner stores every reported change as its value
    pub echo: bool,
    /// Value the owner injects when the button is pressed
    pub max_value: Option<String>,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            value: String::new(),
            format: FormatKind::default(),
            auto_focus: false,
            button_label: None,
            placeholder: None,
            max_length: None,
            input_kind: InputKind::default(),
            echo: true,
            max_value: None,
        }
    }
}

impl FieldSpec {
    pub fn props(&self) -> FieldProps {
        let mut constraints = EntryConstraints {
            input_kind: self.input_kind,
            ..EntryConstraints::default()
        };
        if let Some(max) = self.max_length {
            constraints = constraints.with_max_length(max);
        }

        let mut props = FieldProps::new()
            .with_format(self.format)
            .with_auto_focus(self.auto_focus)
            .with_constraints(constraints)
            .with_test_id("scenario-field");
        if let Some(label) = &self.button_label {
            props = props.with_button_label(label.clone());
        }
        if let Some(placeholder) = &self.placeholder {
            props = props.with_placeholder(placeholder.clone());
        }
        props
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Step {
    #[serde(flatten)]
    pub action: Action,
    #[serde(default)]
    pub expect: Option<Expect>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// User taps into the field
    Focus,
    /// Field loses focus
    Blur,
    /// User presses the action button
    Press,
    /// User replaces the contents (clamped by the surface constraints)
    Type { text: String },
    /// User types at the end of the current contents
    Append { text: String },
    /// Owner sets its value from elsewhere
    External { value: String },
    /// Plain re-render with no event
    Render,
}

impl Action {
    pub fn describe(&self) -> String {
        match self {
            Action::Focus => "focus".to_string(),
            Action::Blur => "blur".to_string(),
            Action::Press => "press".to_string(),
            Action::Type { text } => format!("type {:?}", text),
            Action::Append { text } => format!("append {:?}", text),
            Action::External { value } => format!("external {:?}", value),
            Action::Render => "render".to_string(),
        }
    }
}

/// Assertions checked after a step; unset fields are not checked
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Expect {
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub local_value: Option<String>,
    #[serde(default)]
    pub external: Option<String>,
    #[serde(default)]
    pub focused: Option<bool>,
    #[serde(default)]
    pub button_visible: Option<bool>,
    #[serde(default)]
    pub on_change_count: Option<usize>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

pub fn from_yaml(yaml: &str) -> Result<Scenario> {
    serde_yaml::from_str(yaml).context("parsing scenario YAML")
}

pub fn load(path: &Path) -> Result<Scenario> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    from_yaml(&content).with_context(|| format!("loading scenario {}", path.display()))
}

/// Load every `.yaml`/`.yml` scenario in `dir`, sorted by path. Files that
/// fail to parse are skipped with a warning.
pub fn load_dir(dir: &Path) -> Result<Vec<(PathBuf, Scenario)>> {
    if !dir.exists() {
        anyhow::bail!("scenarios directory does not exist: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading scenarios dir {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut scenarios = Vec::new();
    for path in paths {
        match load(&path) {
            Ok(scenario) => scenarios.push((path, scenario)),
            Err(e) => tracing::warn!("skipping {}: {:#}", path.display(), e),
        }
    }

    if scenarios.is_empty() {
        anyhow::bail!("no scenarios found in {}", dir.display());
    }
    Ok(scenarios)
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Field and owner state after one step
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub index: usize,
    pub action: String,
    pub reconciliation: &'static str,
    pub display: String,
    pub local_value: String,
    pub external: String,
    pub focused: bool,
    pub armed: bool,
    pub button_visible: bool,
    pub on_change_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Result of replaying one scenario
#[derive(Serialize, Debug, Clone)]
pub struct ScenarioRun {
    pub name: String,
    pub records: Vec<StepRecord>,
    pub failures: Vec<String>,
}

impl ScenarioRun {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The owner as seen by the field's callbacks
#[derive(Debug, Default)]
struct Owner {
    value: String,
    changes: Vec<String>,
}

/// Replay `scenario` with `theme`
pub fn run(scenario: &Scenario, theme: &Theme) -> ScenarioRun {
    let env = RenderEnv::new(scenario.viewport.unwrap_or_default(), theme.clone());
    let spec = &scenario.field;

    let owner = Rc::new(RefCell::new(Owner {
        value: spec.value.clone(),
        changes: Vec::new(),
    }));

    let on_change = {
        let owner = Rc::clone(&owner);
        let echo = spec.echo;
        move |value: &str| {
            let mut owner = owner.borrow_mut();
            owner.changes.push(value.to_string());
            if echo {
                owner.value = value.to_string();
            }
        }
    };
    let on_press = {
        let owner = Rc::clone(&owner);
        let max_value = spec.max_value.clone();
        move |_: &PressEvent| {
            if let Some(max) = &max_value {
                owner.borrow_mut().value = max.clone();
            }
        }
    };

    let callbacks = FieldCallbacks::new()
        .on_change(on_change)
        .on_press_button(on_press);
    let mut field = BubbleField::new(spec.value.clone(), spec.props(), MemorySurface::new())
        .with_callbacks(callbacks);

    // Mount
    let external = owner.borrow().value.clone();
    field.render(&external, &env);

    let mut records = Vec::with_capacity(scenario.steps.len());
    let mut failures = Vec::new();

    for (index, step) in scenario.steps.iter().enumerate() {
        let before = FieldSnapshot::capture(&field);

        if let Some(msg) = message_for(&step.action, &field) {
            field.update(msg);
        }
        if let Action::External { value } = &step.action {
            owner.borrow_mut().value = value.clone();
        }

        let external = owner.borrow().value.clone();
        let outcome: Reconciliation = field.reconcile(&external);
        let view = field.render(&external, &env);

        let after = FieldSnapshot::capture(&field);
        let record = StepRecord {
            index,
            action: step.action.describe(),
            reconciliation: outcome.label(),
            display: after.display.clone(),
            local_value: after.local_value.clone(),
            external,
            focused: after.focused,
            armed: after.armed,
            button_visible: view.button.is_some(),
            on_change_count: owner.borrow().changes.len(),
            diff: before.diff(&after),
        };
        tracing::debug!(
            "{} step {}: {} → {}",
            scenario.name,
            index,
            record.action,
            record.reconciliation
        );

        if let Some(expect) = &step.expect {
            failures.extend(check(expect, &record));
        }
        records.push(record);
    }

    ScenarioRun {
        name: scenario.name.clone(),
        records,
        failures,
    }
}

fn message_for(action: &Action, field: &BubbleField<MemorySurface>) -> Option<FieldMsg> {
    let surface = field.surface();
    match action {
        Action::Focus => Some(surface.focus_event()),
        Action::Blur => Some(surface.blur_event()),
        Action::Press => Some(FieldMsg::PressButton(PressEvent {
            label: field.props().button_label.clone(),
        })),
        Action::Type { text } => Some(surface.type_text(text)),
        Action::Append { text } => Some(surface.append_text(text)),
        Action::External { .. } | Action::Render => None,
    }
}

fn check(expect: &Expect, record: &StepRecord) -> Vec<String> {
    let mut failures = Vec::new();
    let mut compare = |what: &str, expected: String, actual: String| {
        if expected != actual {
            failures.push(format!(
                "step {} ({}): expected {} {}, got {}",
                record.index, record.action, what, expected, actual
            ));
        }
    };

    if let Some(display) = &expect.display {
        compare("display", format!("{:?}", display), format!("{:?}", record.display));
    }
    if let Some(local) = &expect.local_value {
        compare(
            "local value",
            format!("{:?}", local),
            format!("{:?}", record.local_value),
        );
    }
    if let Some(external) = &expect.external {
        compare(
            "external",
            format!("{:?}", external),
            format!("{:?}", record.external),
        );
    }
    if let Some(focused) = expect.focused {
        compare("focused", focused.to_string(), record.focused.to_string());
    }
    if let Some(visible) = expect.button_visible {
        compare(
            "button visible",
            visible.to_string(),
            record.button_visible.to_string(),
        );
    }
    if let Some(count) = expect.on_change_count {
        compare(
            "on_change count",
            count.to_string(),
            record.on_change_count.to_string(),
        );
    }
    failures
}
