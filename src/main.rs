use daynight::app::App;
use daynight::telemetry;

fn main() {
    telemetry::init_logging();
    leptos::mount::mount_to_body(App);
}
