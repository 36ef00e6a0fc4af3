#![allow(missing_docs)]
use sunmoon::time::{Clock, SystemClock};
use sunmoon::{get_moon_illumination_now, Observer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Lakewood, NJ coordinates
    let observer = Observer::new(40.070591415768035, -74.20516698767808)?;
    let now = SystemClock.now();

    println!("Sun and Moon - Lakewood, NJ");
    println!("Location: {:.5}°N, {:.5}°W", observer.latitude(), observer.longitude().abs());
    println!("Time: {}", now.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("{:=<60}", "");

    let sun = observer.sun_position(&now);
    println!("Sun:");
    println!("  Azimuth (from south): {:.2}°", sun.azimuth.to_degrees());
    println!("  Altitude: {:.2}°", sun.altitude.to_degrees());
    println!();

    let moon = observer.moon_position(&now);
    println!("Moon:");
    println!("  Azimuth (from south): {:.2}°", moon.azimuth.to_degrees());
    println!("  Apparent altitude: {:.2}°", moon.altitude.to_degrees());
    println!("  Distance: {:.0} km", moon.distance);
    println!("  Parallactic angle: {:.2}°", moon.parallactic_angle.to_degrees());
    println!();

    let illumination = get_moon_illumination_now(&SystemClock);
    println!("Illumination:");
    println!("  Lit fraction: {:.1}%", illumination.fraction * 100.0);
    println!("  Phase: {:.3}", illumination.phase);
    println!("  Bright limb angle: {:.2}°", illumination.angle.to_degrees());

    Ok(())
}
