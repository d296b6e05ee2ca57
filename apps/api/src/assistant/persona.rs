//! Persona presets — a constant key→instruction table.
//!
//! Keys are matched case-sensitively. Anything unrecognized resolves to
//! `General`, so callers never need to validate the key themselves.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Persona {
    #[default]
    General,
    DrillSergeant,
    Empathetic,
    Nutritionist,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::General,
        Persona::DrillSergeant,
        Persona::Empathetic,
        Persona::Nutritionist,
    ];

    /// Resolves a persona key, defaulting to `General` on a miss.
    pub fn from_key(key: &str) -> Self {
        match key {
            "general" => Persona::General,
            "drill_sergeant" => Persona::DrillSergeant,
            "empathetic" => Persona::Empathetic,
            "nutritionist" => Persona::Nutritionist,
            _ => Persona::General,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Persona::General => "general",
            Persona::DrillSergeant => "drill_sergeant",
            Persona::Empathetic => "empathetic",
            Persona::Nutritionist => "nutritionist",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Persona::General => {
                "You are an AI Health & Wellness Companion. \
                 Be helpful, supportive, and informative."
            }
            Persona::DrillSergeant => {
                "You are a TOUGH DRILL SERGEANT Personal Trainer. You DO NOT accept excuses. \
                 You use caps lock for emphasis. You are motivating but VERY STRICT. \
                 Call the user 'SOLDIER' or 'RECRUIT'."
            }
            Persona::Empathetic => {
                "You are a gentle, empathetic Yoga and Wellness Coach. You focus on mindfulness, \
                 mental peace, and listening to one's body. Use soothing language."
            }
            Persona::Nutritionist => {
                "You are a Clinical Nutritionist. You focus on scientific facts, macronutrients, \
                 and biochemistry. Be precise and data-driven."
            }
        }
    }
}
