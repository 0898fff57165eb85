//! Block Kit builders for the greeting menu and the four modals

use serde_json::{json, Value};
use vitalbot_shared::{CompletionLevel, Gender, MuscleGroup};

/// Modal element collecting a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Gender,
    Age,
    TobaccoUse,
    LdlCholesterol,
    Height,
    Weight,
    MuscleGroup,
    TrainingWeight,
    Completion,
}

/// A form field and the modal element that collects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name used by the form types and their validation errors
    pub name: &'static str,
    pub block_id: &'static str,
    pub action_id: &'static str,
    pub kind: FieldKind,
}

impl Field {
    const fn new(name: &'static str, block_id: &'static str, action_id: &'static str, kind: FieldKind) -> Self {
        Self { name, block_id, action_id, kind }
    }
}

pub const GENDER: Field = Field::new("gender", "gender_block", "gender_select", FieldKind::Gender);
pub const AGE: Field = Field::new("age", "age_block", "age_input", FieldKind::Age);
pub const SMOKES: Field = Field::new("tobacco_use", "smoke_block", "smoke_input", FieldKind::TobaccoUse);
pub const LDL: Field = Field::new("ldl_cholesterol", "ldl_block", "ldl_input", FieldKind::LdlCholesterol);
pub const HEIGHT: Field = Field::new("height_cm", "height_block", "height_input", FieldKind::Height);
pub const WEIGHT: Field = Field::new("weight_kg", "weight_block", "weight_input", FieldKind::Weight);
pub const MUSCLE: Field = Field::new("muscle_group", "muscle_block", "muscle_select", FieldKind::MuscleGroup);
pub const TRAINING_WEIGHT: Field = Field::new(
    "training_weight",
    "training_weight_block",
    "training_weight_input",
    FieldKind::TrainingWeight,
);
pub const COMPLETION: Field = Field::new("completion", "completion_block", "completion_select", FieldKind::Completion);

const ALL_FIELDS: [Field; 9] = [GENDER, AGE, SMOKES, LDL, HEIGHT, WEIGHT, MUSCLE, TRAINING_WEIGHT, COMPLETION];

/// Block id of the element collecting a form field
pub fn block_for(field_name: &str) -> Option<&'static str> {
    ALL_FIELDS
        .iter()
        .find(|field| field.name == field_name)
        .map(|field| field.block_id)
}

/// Options of the greeting menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Longevity,
    VitalView,
    TrainingPlan,
    ProgressCheck,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Longevity,
        MenuChoice::VitalView,
        MenuChoice::TrainingPlan,
        MenuChoice::ProgressCheck,
    ];

    pub fn action_id(&self) -> &'static str {
        match self {
            MenuChoice::Longevity => "longevity",
            MenuChoice::VitalView => "vital_view",
            MenuChoice::TrainingPlan => "training_plan",
            MenuChoice::ProgressCheck => "progress_check",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Longevity => "Check Longevity",
            MenuChoice::VitalView => "Vital View",
            MenuChoice::TrainingPlan => "Training Plan",
            MenuChoice::ProgressCheck => "Progress Check",
        }
    }

    /// Name used once chosen: the confirmation text and the modal title
    pub fn title(&self) -> &'static str {
        match self {
            MenuChoice::VitalView => "Check Vital View",
            other => other.label(),
        }
    }

    /// Callback id of the modal this choice opens
    pub fn callback_id(&self) -> &'static str {
        match self {
            MenuChoice::Longevity => "health_form",
            MenuChoice::VitalView => "vital_view_form",
            MenuChoice::TrainingPlan => "training_form",
            MenuChoice::ProgressCheck => "progress_form",
        }
    }

    pub fn from_action_id(action_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.action_id() == action_id)
    }

    pub fn from_callback_id(callback_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.callback_id() == callback_id)
    }

    /// Modal fields, in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            MenuChoice::Longevity => &[GENDER, AGE, SMOKES, LDL],
            MenuChoice::VitalView => &[GENDER, AGE, HEIGHT, WEIGHT],
            MenuChoice::TrainingPlan => &[GENDER, MUSCLE, TRAINING_WEIGHT],
            MenuChoice::ProgressCheck => &[COMPLETION],
        }
    }
}

fn plain_text(text: &str) -> Value {
    json!({"type": "plain_text", "text": text})
}

fn mrkdwn_section(text: &str) -> Value {
    json!({"type": "section", "text": {"type": "mrkdwn", "text": text}})
}

fn option(text: &str, value: &str) -> Value {
    json!({"text": plain_text(text), "value": value})
}

fn static_select(field: Field, label: &str, options: Vec<Value>) -> Value {
    json!({
        "type": "input",
        "block_id": field.block_id,
        "label": plain_text(label),
        "element": {
            "type": "static_select",
            "action_id": field.action_id,
            "options": options,
        }
    })
}

fn text_input(field: Field, label: &str, placeholder: &str) -> Value {
    json!({
        "type": "input",
        "block_id": field.block_id,
        "label": plain_text(label),
        "element": {
            "type": "plain_text_input",
            "action_id": field.action_id,
            "placeholder": plain_text(placeholder),
        }
    })
}

fn input_block(field: Field) -> Value {
    match field.kind {
        FieldKind::Gender => static_select(
            field,
            "Your gender?",
            Gender::ALL
                .iter()
                .map(|gender| {
                    let value = gender.as_str();
                    let mut text = value.to_string();
                    text[..1].make_ascii_uppercase();
                    option(&text, value)
                })
                .collect(),
        ),
        FieldKind::Age => text_input(field, "May I ask your age ?", "e.g. 35"),
        FieldKind::TobaccoUse => static_select(
            field,
            "Do you currently use any form of tobacco or smoke, even occasionally?",
            vec![option("Yes", "Yes"), option("No", "No")],
        ),
        FieldKind::LdlCholesterol => text_input(
            field,
            "Could you provide your most recent LDL cholesterol level?",
            "e.g. 110",
        ),
        FieldKind::Height => text_input(
            field,
            "May I ask your current height in centimeters (cm)?",
            "e.g. 175",
        ),
        FieldKind::Weight => text_input(
            field,
            "What is your current body weight in kilograms (kg)?",
            "e.g. 75",
        ),
        FieldKind::MuscleGroup => static_select(
            field,
            "Which muscle group do you want to train?",
            MuscleGroup::ALL
                .iter()
                .map(|muscle| option(muscle.name(), muscle.name()))
                .collect(),
        ),
        FieldKind::TrainingWeight => {
            let mut block = text_input(
                field,
                "What weight do you use for your main compound lift (kg)?",
                "e.g. 60",
            );
            block["optional"] = json!(true);
            block
        }
        FieldKind::Completion => static_select(
            field,
            "How much of this week's plan have you completed?",
            CompletionLevel::all()
                .map(|level| {
                    let label = level.label();
                    option(&label, &label)
                })
                .collect(),
        ),
    }
}

/// Greeting menu: `(fallback text, blocks)`
pub fn greeting_menu(user: &str, status: &str) -> (String, Value) {
    let text = format!("Hi <@{user}>! What would you like to do?");
    let buttons: Vec<Value> = MenuChoice::ALL
        .iter()
        .map(|choice| {
            json!({
                "type": "button",
                "text": plain_text(choice.label()),
                "value": choice.action_id(),
                "action_id": choice.action_id(),
            })
        })
        .collect();
    let blocks = json!([
        mrkdwn_section(&text),
        {"type": "actions", "elements": buttons},
        {"type": "context", "elements": [{"type": "mrkdwn", "text": status}]},
    ]);
    (text, blocks)
}

/// Menu replacement once a choice is made: `(fallback text, blocks)`
pub fn chosen_message(user: &str, choice: MenuChoice) -> (String, Value) {
    let text = format!("<@{user}> chose *{}*", choice.title());
    let blocks = json!([
        mrkdwn_section(&format!("✅ {text}")),
        {"type": "context", "elements": [{"type": "mrkdwn", "text": "You already made a choice. 🎉"}]},
    ]);
    (text, blocks)
}

/// Modal for a menu choice; the channel travels in `private_metadata`
pub fn modal(choice: MenuChoice, channel_id: &str) -> Value {
    let blocks: Vec<Value> = choice.fields().iter().copied().map(input_block).collect();
    json!({
        "type": "modal",
        "callback_id": choice.callback_id(),
        "title": plain_text(choice.title()),
        "submit": plain_text("Submit"),
        "close": plain_text("Cancel"),
        "private_metadata": channel_id,
        "blocks": blocks,
    })
}
