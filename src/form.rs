//! Screening form description for presentation layers
//!
//! Lists every input section, field, selectable option and help text. A UI,
//! a CLI prompt or an HTTP client renders it however it likes; the schema
//! carries no decision logic.

use serde::Serialize;

use crate::types::{CompressionCost, EnvironmentalImpact, GasAvailability, Label, Rating};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormField {
    /// Key inside the section's JSON object (e.g. `gas_liquid_ratio`)
    pub key: &'static str,
    pub label: &'static str,
    /// Accepted canonical labels, in display order
    pub options: Vec<&'static str>,
    pub help: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormSection {
    /// Section key, matching the assessment group (`production`, ...)
    pub id: &'static str,
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormSchema {
    pub title: &'static str,
    pub description: &'static str,
    pub sections: Vec<FormSection>,
}

fn options<T: Label>() -> Vec<&'static str> {
    T::DOMAIN.iter().map(|m| m.label()).collect()
}

impl FormSchema {
    /// The gas lift screening form
    pub fn gas_lift() -> Self {
        Self {
            title: "GLID - Gas Lift Installation Decision",
            description: "Screen a well for gas lift from production, economic feasibility \
                          and environmental impact information.",
            sections: vec![
                FormSection {
                    id: "production",
                    title: "Production Data",
                    fields: vec![
                        FormField {
                            key: "productivity_index",
                            label: "Productivity Index",
                            options: options::<Rating>(),
                            help: "Select the suitable Productivity Index description.",
                        },
                        FormField {
                            key: "bottomhole_pressure",
                            label: "Bottomhole Pressure",
                            options: options::<Rating>(),
                            help: "Enter the Bottomhole reservoir pressure description of the well.",
                        },
                        FormField {
                            key: "gas_liquid_ratio",
                            label: "Gas Liquid Ratio",
                            options: options::<Rating>(),
                            help: "Select suitable Gas Liquid Ratio description.",
                        },
                    ],
                },
                FormSection {
                    id: "economic",
                    title: "Economic feasibility Data",
                    fields: vec![
                        FormField {
                            key: "gas_availability",
                            label: "Gas availability",
                            options: options::<GasAvailability>(),
                            help: "Select the gas availability.",
                        },
                        FormField {
                            key: "compression_cost",
                            label: "Compression cost",
                            options: options::<CompressionCost>(),
                            help: "Select the compression cost availability.",
                        },
                    ],
                },
                FormSection {
                    id: "environmental",
                    title: "Environmental impact Data",
                    fields: vec![FormField {
                        key: "impact",
                        label: "Environmental impact",
                        options: options::<EnvironmentalImpact>(),
                        help: "Select the suitable environmental impact of the project.",
                    }],
                },
            ],
        }
    }

    /// Plain-text listing for terminals
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, self.description);
        for section in &self.sections {
            out.push_str(&format!("\n[{}] {}\n", section.id, section.title));
            for field in &section.fields {
                out.push_str(&format!(
                    "  {:<22} {}\n  {:<22} {}\n",
                    field.key,
                    field.options.join(" | "),
                    "",
                    field.help
                ));
            }
        }
        out
    }
}
