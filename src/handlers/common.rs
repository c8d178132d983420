pub async fn root() -> &'static str {
    "SirDonnyLizard terminal backend. Recent posts live at /api/tweets"
}

pub async fn health() -> &'static str {
    "OK"
}
