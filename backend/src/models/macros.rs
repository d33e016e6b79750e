/// Defines a fieldless enum whose variants have a fixed textual label
/// (the column header or query value used for them) and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `#[serde(rename = label)]` on every variant
/// - `ALL` (declaration order) and `label()`
/// - `Display` (the label) and a case-insensitive `FromStr`
///
/// Usage:
///   define_label_enum! {
///       pub enum Conference {
///           East => "East",
///           West => "West",
///       }
///   }
#[macro_export]
macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical label used in data files, query strings and JSON.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let expected: Vec<&str> = $name::ALL.iter().map(|v| v.label()).collect();
                        format!(
                            "unknown {} '{}', expected one of: {}",
                            stringify!($name),
                            wanted,
                            expected.join(", ")
                        )
                    })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    define_label_enum! {
        enum Shade {
            Light => "LIGHT",
            Dark => "Dark",
        }
    }

    #[test]
    fn test_labels_and_order() {
        assert_eq!(Shade::ALL, &[Shade::Light, Shade::Dark]);
        assert_eq!(Shade::Light.label(), "LIGHT");
        assert_eq!(Shade::Dark.to_string(), "Dark");
        assert!(Shade::Light < Shade::Dark);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("light".parse::<Shade>(), Ok(Shade::Light));
        assert_eq!(" DARK ".parse::<Shade>(), Ok(Shade::Dark));
        let err = "dim".parse::<Shade>().unwrap_err();
        assert!(err.contains("LIGHT, Dark"));
    }

    #[test]
    fn test_serde_uses_label() {
        assert_eq!(serde_json::to_string(&Shade::Light).unwrap(), "\"LIGHT\"");
        let parsed: Shade = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(parsed, Shade::Dark);
    }
}
