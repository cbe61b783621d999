use colour::red;

pub fn print_intro() {
    println!(
        r#"
             __    _ __  __           __
 _      __/ /_  (_) /_/ /____  ____/ /
| | /| / / __ \/ / __/ __/ _ \/ __  /
| |/ |/ / / / / / /_/ /_/  __/ /_/ /
|__/|__/_/ /_/_/\__/\__/\___/\__,_/ "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that tracing is way slower than it should be.\n\n");
    }
}
