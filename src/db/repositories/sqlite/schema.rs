diesel::table! {
    employees (id) {
        id -> BigInt,
        name -> Text,
        surname -> Text,
        position -> Text,
    }
}
