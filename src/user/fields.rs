//! The user field schema.
//!
//! One table declares every remote attribute of a user together with the
//! conversion applied when a raw value is assigned to it. The same ordered list
//! is used for instance storage and for the `fields` param sent to the remote API.

use std::fmt::{self, Display};

/// How a raw remote value is turned into a typed field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Stored unchanged.
    Raw,
    Location,
    HighschoolInfo,
    Status,
    AffiliationList,
    EducationList,
    WorkList,
}

macro_rules! fields {
    ($($name:ident => $conversion:ident),+ $(,)?) => {
        paste::paste! {
            /// A remote user attribute.
            ///
            /// Variants are declared in remote order, so the derived `Ord`
            /// matches [`Field::ALL`].
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub enum Field {
                $( [<$name:camel>], )+
            }

            impl Field {
                /// Every field, in the order the remote API documents them.
                pub const ALL: &'static [Field] = &[ $( Field::[<$name:camel>], )+ ];

                /// Wire name of the field.
                pub fn name(self) -> &'static str {
                    match self {
                        $( Field::[<$name:camel>] => stringify!($name), )+
                    }
                }

                pub fn conversion(self) -> Conversion {
                    match self {
                        $( Field::[<$name:camel>] => Conversion::$conversion, )+
                    }
                }
            }
        }
    };
}

fields! {
    status => Status,
    political => Raw,
    pic_small => Raw,
    name => Raw,
    quotes => Raw,
    is_app_user => Raw,
    tv => Raw,
    profile_update_time => Raw,
    meeting_sex => Raw,
    hs_info => HighschoolInfo,
    timezone => Raw,
    relationship_status => Raw,
    hometown_location => Location,
    about_me => Raw,
    wall_count => Raw,
    significant_other_id => Raw,
    pic_big => Raw,
    music => Raw,
    uid => Raw,
    work_history => WorkList,
    sex => Raw,
    religion => Raw,
    notes_count => Raw,
    activities => Raw,
    pic_square => Raw,
    movies => Raw,
    has_added_app => Raw,
    education_history => EducationList,
    birthday => Raw,
    first_name => Raw,
    meeting_for => Raw,
    last_name => Raw,
    interests => Raw,
    current_location => Location,
    pic => Raw,
    books => Raw,
    affiliations => AffiliationList,
}

impl Field {
    /// Looks a field up by its wire name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.name() == name)
    }

    /// Comma-joined wire names of `selected`, in schema order.
    ///
    /// An empty selection means every field.
    pub fn join(selected: &[Field]) -> String {
        Field::ALL
            .iter()
            .filter(|field| selected.is_empty() || selected.contains(field))
            .map(|field| field.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
