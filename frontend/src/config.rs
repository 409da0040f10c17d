
#[cfg(debug_assertions)]
pub fn get_lead_store_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321",  // Local supabase emulator
    }
}

#[cfg(not(debug_assertions))]
pub fn get_lead_store_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("")
}

/// Public (anon) key sent with every write. Row level security on the
/// `lead` table only allows inserts for this role.
pub fn get_lead_store_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}
