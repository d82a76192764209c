/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use pattern_catalog::RegistryEvent;
///
/// let event = RegistryEvent::Construct { type_name: "i32" };
/// assert_eq!(event.to_string(), "construct { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// The first instance of a type was constructed and recorded.
    Construct {
        /// The type name of the constructed value (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// The constructor for a type failed; nothing was recorded.
    ConstructFailed {
        /// The type name whose constructor failed
        type_name: &'static str,
    },

    /// An instance request was served by the already-recorded instance.
    ///
    /// Any constructor arguments supplied with the request were discarded.
    Reuse {
        /// The type name that was requested
        type_name: &'static str,
    },

    /// A lookup-only request (`get`) was performed.
    Get {
        /// The type name that was requested
        type_name: &'static str,
        /// Whether the value was found in the registry
        found: bool,
    },

    /// A type existence check was performed.
    Contains {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether the type exists in the registry
        found: bool,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Construct { type_name } => {
                write!(f, "construct {{ type_name: {} }}", type_name)
            }
            RegistryEvent::ConstructFailed { type_name } => {
                write!(f, "construct failed {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Reuse { type_name } => {
                write!(f, "reuse {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {}, found: {} }}", type_name, found)
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(
                    f,
                    "contains {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
        }
    }
}
