use serde::Deserialize;

fn default_base_url() -> String {
    String::from("http://localhost:5000")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub mark_paid: MarkPaidDefaults,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            base_url: default_base_url(),
            mark_paid: MarkPaidDefaults::default(),
        }
    }
}

/// Fixed payer identity and payment mode applied by the mark-as-paid action.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkPaidDefaults {
    pub spended_by: String,
    pub mode: String,
}

impl Default for MarkPaidDefaults {
    fn default() -> MarkPaidDefaults {
        MarkPaidDefaults {
            spended_by: String::from("TSR"),
            mode: String::from("Cash"),
        }
    }
}
