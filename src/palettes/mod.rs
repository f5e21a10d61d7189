// Built-in schemes.  Categorical ones follow the d3, Google and Airbnb
// palettes; sequential and diverging ones include the Brewer schemes,
// see http://colorbrewer2.org/

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

macro_rules! schemes {
    ($kind: ident; $($id: literal, $label: literal => [$($c: literal),* $(,)?];)*) => {
        vec![$( SchemeData { id: $id, label: $label, kind: SchemeKind::$kind,
                             colors: vec![$($c),*] }, )*]
    }
}

lazy_static! {
  pub(crate) static ref CATEGORICAL: Vec<SchemeData> = schemes![Categorical;
    "supersetColors", "Superset Colors" => [
      "#1FA8C9", "#454E7C", "#5AC189", "#FF7F44", "#666666", "#E04355",
      "#FCC700", "#A868B7", "#3CCCCB", "#A38F79", "#8FD3E4", "#A1A6BD",
      "#ACE1C4", "#FEC0A1", "#B2B2B2", "#EFA1AA", "#FDE380", "#D3B3DA",
      "#9EE5E5", "#D1C6BC"];
    "d3Category10", "D3 Category 10" => [
      "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
      "#e377c2", "#7f7f7f", "#bcbd22", "#17becf"];
    "d3Category20", "D3 Category 20" => [
      "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a",
      "#d62728", "#ff9896", "#9467bd", "#c5b0d5", "#8c564b", "#c49c94",
      "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7", "#bcbd22", "#dbdb8d",
      "#17becf", "#9edae5"];
    "d3Category20b", "D3 Category 20b" => [
      "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939", "#8ca252",
      "#b5cf6b", "#cedb9c", "#8c6d31", "#bd9e39", "#e7ba52", "#e7cb94",
      "#843c39", "#ad494a", "#d6616b", "#e7969c", "#7b4173", "#a55194",
      "#ce6dbd", "#de9ed6"];
    "d3Category20c", "D3 Category 20c" => [
      "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c",
      "#fdae6b", "#fdd0a2", "#31a354", "#74c476", "#a1d99b", "#c7e9c0",
      "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb", "#636363", "#969696",
      "#bdbdbd", "#d9d9d9"];
    "googleCategory10c", "Google Category 10c" => [
      "#3366cc", "#dc3912", "#ff9900", "#109618", "#990099", "#0099c6",
      "#dd4477", "#66aa00", "#b82e2e", "#316395"];
    "bnbColors", "Airbnb Colors" => [
      "#ff5a5f", "#7b0051", "#007A87", "#00d1c1", "#8ce071", "#ffb400",
      "#b4a76c", "#ff8083", "#cc0086", "#00a1b3", "#00ffeb", "#bbedab",
      "#ffd266", "#cbc29a", "#ff3339", "#ff1ab1", "#005c66", "#00b3a5",
      "#55d12e", "#b37e00", "#988b4e"];
    "presetColors", "Preset" => [
      "#6BD3B3", "#FCC550", "#408184", "#66CBE2", "#EE5B5A", "#4A7DAF",
      "#8A4D53", "#D6D6D6"];
  ];

  pub(crate) static ref SEQUENTIAL: Vec<SchemeData> = {
    let mut v = schemes![Sequential;
      "blue_white_yellow", "blue/white/yellow" => ["#00d1c1", "white", "#ffb400"];
      "fire", "fire" => ["white", "yellow", "red", "black"];
      "white_black", "white/black" => ["white", "black"];
      "black_white", "black/white" => ["black", "white"];
      "dark_blue", "dark blues" => [
        "#EBF5F8", "#6BB1CC", "#357E9B", "#1B4150", "#092935"];
      "blues", "blues" => [
        "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6",
        "#2171b5", "#08519c", "#08306b"];
      "greens", "greens" => [
        "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d",
        "#238b45", "#006d2c", "#00441b"];
      "oranges", "oranges" => [
        "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913",
        "#d94801", "#a63603", "#7f2704"];
      "purples", "purples" => [
        "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba",
        "#6a51a3", "#54278f", "#3f007d"];
      "reds", "reds" => [
        "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c",
        "#cb181d", "#a50f15", "#67000d"];
    ];
    v.extend(schemes![Diverging;
      "rdbu", "red/blue" => [
        "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7",
        "#d1e5f0", "#92c5de", "#4393c3", "#2166ac", "#053061"];
      "spectral", "spectral" => [
        "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf",
        "#e6f598", "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2"];
    ]);
    v
  };
}
