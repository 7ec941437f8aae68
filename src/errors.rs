use fractic_server_error::{define_client_error, define_internal_error};

// Input validation.
define_client_error!(MissingUserId, "User id must be non-empty.");
define_client_error!(InvalidHabitName, "Invalid habit name: {details}.", { details: &str });
define_client_error!(
    DuplicateHabitName,
    "A custom habit named '{name}' already exists.",
    { name: &str }
);
define_client_error!(
    InvalidRewardField,
    "Reward field '{field}' must be a finite, non-negative number (got {value}).",
    { field: &str, value: f64 }
);
define_client_error!(
    InvalidDuration,
    "Habit duration must be a positive, finite number (got {value}).",
    { value: f64 }
);
define_client_error!(InvalidCalendarDate, "Invalid calendar date: {date}.", { date: &str });

// Reference resolution.
define_client_error!(CustomHabitNotFound, "No custom habit with id '{id}'.", { id: &str });
define_client_error!(
    InvalidEventReference,
    "Habit event reference is missing a usable identifier."
);
define_client_error!(EventNotFound, "No habit event with id '{id}'.", { id: &str });

// Store-related.
define_internal_error!(
    StoreRejected,
    "Persistent store rejected the batch: {details}.",
    { details: &str }
);
define_internal_error!(
    CorruptDocument,
    "Stored document in collection '{collection}' could not be decoded.",
    { collection: &str }
);
