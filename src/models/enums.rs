use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(UserRole {
    Clinician => "clinician",
    Patient => "patient",
    Admin => "admin",
});

str_enum!(PrescriptionStatus {
    Pending => "pending",
    Active => "active",
    Completed => "completed",
});

str_enum!(AppointmentStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
    System => "system",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn user_role_round_trip() {
        for (variant, s) in [
            (UserRole::Clinician, "clinician"),
            (UserRole::Patient, "patient"),
            (UserRole::Admin, "admin"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(UserRole::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn prescription_status_round_trip() {
        for (variant, s) in [
            (PrescriptionStatus::Pending, "pending"),
            (PrescriptionStatus::Active, "active"),
            (PrescriptionStatus::Completed, "completed"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(PrescriptionStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn appointment_status_round_trip() {
        for (variant, s) in [
            (AppointmentStatus::Scheduled, "scheduled"),
            (AppointmentStatus::Completed, "completed"),
            (AppointmentStatus::Cancelled, "cancelled"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AppointmentStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn message_role_round_trip() {
        for (variant, s) in [
            (MessageRole::User, "user"),
            (MessageRole::Assistant, "assistant"),
            (MessageRole::System, "system"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(MessageRole::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = UserRole::from_str("superuser").unwrap_err();
        assert!(err.to_string().contains("superuser"));
    }

    #[test]
    fn serde_uses_snake_case_strings() {
        let json = serde_json::to_string(&UserRole::Clinician).unwrap();
        assert_eq!(json, "\"clinician\"");
        let back: UserRole = serde_json::from_str("\"patient\"").unwrap();
        assert_eq!(back, UserRole::Patient);
    }
}
