use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_legend::{CssResolver, Legend, LegendEntry, Theme};

type Err = Box<dyn Error>;

fn table_of_entries(fh: &mut impl Write, entries: &[LegendEntry],
                    width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for e in entries {
        writeln!(fh, "  <td style=\"min-width: {width}px; height: 30px; \
                      font-size: 0.6em; text-align: center; \
                      background-color: {}; color: {}\">{}</td>",
                 e.background, e.foreground,
                 e.label.as_deref().unwrap_or(""))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn legend(fh: &mut impl Write, legend: Legend,
          width: u32, comment: &str) -> Result<(), Err> {
    let entries = legend.entries(&CssResolver)?;
    table_of_entries(fh, &entries, width, comment)
}

fn theme(fh: &mut impl Write, color: &str) -> Result<(), Err> {
    let t = Theme::new(&CssResolver, color)?;
    writeln!(fh, "<div style=\"display: inline-block; padding: 8px; \
                  margin: 4px; background-color: {}; color: {}; \
                  border: 2px solid {}\">{} ({} icons)</div>",
             t.background(), t.foreground(), t.border(), color,
             t.icon_variant())?;
    Ok(())
}


fn main() -> Result<(), Err> {
    env_logger::init();
    let mut fh = BufWriter::new(File::create("legend.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color_legend: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Legends</h3>")?;
    legend(&mut fh, Legend::default(), 30, "default")?;
    legend(&mut fh, Legend::default().range(-5., 35.).unit("°C")
           .colors_csv("#313695,#4575b4,#74add1,#abd9e9,#fee090,\
                        #fdae61,#f46d43,#d73027"),
           30, "temperature (linear)")?;
    legend(&mut fh, Legend::default().range(0.1, 1000.).log(true).unit("mm")
           .colors_csv("white,lightcyan,skyblue,dodgerblue,blue,navy"),
           40, "rainfall (logarithmic)")?;
    legend(&mut fh, Legend::default().colors_csv("yellow,not-a-color,black"),
           40, "an unknown color is taken as white")?;

    writeln!(fh, "<h3>Themes</h3>")?;
    for color in ["#313131", "white", "gold", "teal", "hsl(280, 60%, 30%)",
                  "rgb(164, 164, 164)", "rgb(166, 166, 166)"] {
        theme(&mut fh, color)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
