use ulid::Ulid;

/// Build a collection-scoped id like `recipe_01J9ZKV8...`. ULIDs keep ids
/// unique and roughly time-ordered; nothing else depends on the scheme, and
/// imported data may carry ids of any shape.
pub fn new_id(kind: &str) -> String {
    format!("{}_{}", kind, Ulid::new())
}
