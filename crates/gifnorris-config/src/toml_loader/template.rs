/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# GifNorris Configuration
# Only override what you want to change -- missing fields use defaults.

[service]
# host = "https://matchilling-chuck-norris-jokes-v1.p.mashape.com"
# base_path = "/jokes"
# header_name = "X-Mashape-Key"
# The GIFNORRIS_API_KEY environment variable takes precedence over this value.
api_key = ""

[polling]
# delay_secs = 15        # 1-3600, measured from the previous joke
# category = "random"    # random, science, food

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
