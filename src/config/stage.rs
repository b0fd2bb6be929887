use anyhow::anyhow;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Stage {
    #[default]
    Local,
    Development,
    Production,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Local => "local",
            Stage::Development => "development",
            Stage::Production => "production",
        }
    }
}

impl TryFrom<&String> for Stage {
    type Error = anyhow::Error;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "local" => Ok(Stage::Local),
            "development" => Ok(Stage::Development),
            "production" => Ok(Stage::Production),
            _ => Err(anyhow!("Invalid stage: {}", value)),
        }
    }
}
