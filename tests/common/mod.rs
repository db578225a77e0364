use unisport_abrechnung::input::Config;

#[must_use]
pub fn make_config(weekday: &str, start: &str, end: &str, hourly_fee: f64) -> Config {
    Config::try_from_toml(
        &format!(
            concat!(
                "[instructor]\n",
                "name = \"Max Mustermann\"\n",
                "address = [\"Musterstraße 1\", \"38106 Braunschweig\"]\n",
                "iban = \"DE02120300000000202051\"\n",
                "\n",
                "[class]\n",
                "name = \"Jiu Jitsu\"\n",
                "weekday = \"{weekday}\"\n",
                "time = {{ start = \"{start}\", end = \"{end}\" }}\n",
                "hourly_fee = {hourly_fee:?}\n",
                "\n",
                "[template]\n",
                "file = \"Abrechnung_2023-10-24.pdf\"\n",
                "fee_tier = \"900\"\n",
            ),
            weekday = weekday,
            start = start,
            end = end,
            hourly_fee = hourly_fee,
        ),
        ".",
    )
    .expect("config should be valid")
}
