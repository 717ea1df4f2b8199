pub fn execute() -> Result<(), String> {
    println!(
        "📖 podlytics - podcast listener chart generator\n\
         \n\
         Fetches a JSON listener time series from a URL and renders it as a\n\
         line-chart PNG.\n\
         \n\
         📊 Charts\n\
         \x20 podlytics chart <url> <mount.png> [label] [color]\n\
         \x20     Render the series at <url> onto <mount.png>.\n\
         \x20     Default label: \"Daily Listeners\", default color: #3e95cd.\n\
         \n\
         🔮 Forecasts\n\
         \x20 podlytics forecast <url> <mount.png> [days] [label] [color]\n\
         \x20     Extend the series with a linear projection (default 30 days)\n\
         \x20     and render the combined chart.\n\
         \n\
         🎨 Colors\n\
         \x20 #rgb, #rrggbb, rgb(r,g,b), or a named color (red, green, blue,\n\
         \x20 purple, orange, teal, pink, cyan, brown, grey, black, white).\n\
         \n\
         ⚙️ Environment\n\
         \x20 CHART_WIDTH / CHART_HEIGHT  Raster size (default 1024x768)\n\
         \x20 RUST_LOG                    Tracing filter directives"
    );

    Ok(())
}
