//! Analytics snippets for the configured trackers. Emitted last so the
//! tags that matter for crawlers come first.

use crate::config::AnalyticsConfig;

pub(crate) fn build(config: &AnalyticsConfig) -> String {
    let mut out = String::new();

    if let Some(id) = config.ga4.measurement_id.as_deref().filter(|id| !id.is_empty()) {
        out.push_str(&format!(
            "<!-- Google tag (gtag.js) -->\n\
             <script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
             <script>\n\
             window.dataLayer = window.dataLayer || [];\n\
             function gtag(){{dataLayer.push(arguments);}}\n\
             gtag('js', new Date());\n\
             gtag('config', '{id}');\n\
             </script>\n"
        ));
    }

    if let Some(id) = config.gtm.container_id.as_deref().filter(|id| !id.is_empty()) {
        out.push_str(&format!(
            "<!-- Google Tag Manager -->\n\
             <script>(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\n\
             new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\n\
             j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\n\
             'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\n\
             }})(window,document,'script','dataLayer','{id}');</script>\n\
             <!-- End Google Tag Manager -->\n"
        ));
    }

    if let Some(id) = config.yandex.counter_id.as_deref().filter(|id| !id.is_empty()) {
        out.push_str(&format!(
            "<!-- Yandex.Metrika counter -->\n\
             <script type=\"text/javascript\">\n\
             (function(m,e,t,r,i,k,a){{m[i]=m[i]||function(){{(m[i].a=m[i].a||[]).push(arguments)}};\n\
             m[i].l=1*new Date();k=e.createElement(t),a=e.getElementsByTagName(t)[0],\n\
             k.async=1,k.src=r,a.parentNode.insertBefore(k,a)}})\n\
             (window, document, \"script\", \"https://mc.yandex.ru/metrika/tag.js\", \"ym\");\n\
             ym({id}, \"init\", {{ clickmap:true, trackLinks:true, accurateTrackBounce:true }});\n\
             </script>\n\
             <noscript><div><img src=\"https://mc.yandex.ru/watch/{id}\" \
             style=\"position:absolute; left:-9999px;\" alt=\"\"></div></noscript>\n\
             <!-- /Yandex.Metrika counter -->\n"
        ));
    }

    if let Some(id) = config.facebook.pixel_id.as_deref().filter(|id| !id.is_empty()) {
        out.push_str(&format!(
            "<!-- Facebook Pixel Code -->\n\
             <script>\n\
             !function(f,b,e,v,n,t,s)\n\
             {{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?\n\
             n.callMethod.apply(n,arguments):n.queue.push(arguments)}};\n\
             if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';\n\
             n.queue=[];t=b.createElement(e);t.async=!0;\n\
             t.src=v;s=b.getElementsByTagName(e)[0];\n\
             s.parentNode.insertBefore(t,s)}}(window, document,'script',\n\
             'https://connect.facebook.net/en_US/fbevents.js');\n\
             fbq('init', '{id}');\n\
             fbq('track', 'PageView');\n\
             </script>\n\
             <noscript><img height=\"1\" width=\"1\" style=\"display:none\"\n\
             src=\"https://www.facebook.com/tr?id={id}&ev=PageView&noscript=1\"\n\
             /></noscript>\n\
             <!-- End Facebook Pixel Code -->\n"
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        assert_eq!(build(&AnalyticsConfig::default()), "");
    }

    #[test]
    fn test_ga4_snippet() {
        let mut config = AnalyticsConfig::default();
        config.ga4.measurement_id = Some("G-ABC123".into());
        let html = build(&config);
        assert!(html.contains("<!-- Google tag (gtag.js) -->"));
        assert!(html.contains("https://www.googletagmanager.com/gtag/js?id=G-ABC123"));
        assert!(html.contains("gtag('config', 'G-ABC123');"));
    }

    #[test]
    fn test_all_trackers_in_order() {
        let config = AnalyticsConfig {
            ga4: crate::config::Ga4Config {
                measurement_id: Some("G-1".into()),
            },
            gtm: crate::config::GtmConfig {
                container_id: Some("GTM-2".into()),
            },
            yandex: crate::config::YandexConfig {
                counter_id: Some("333".into()),
            },
            facebook: crate::config::PixelConfig {
                pixel_id: Some("444".into()),
            },
        };
        let html = build(&config);
        let ga = html.find("gtag.js").unwrap();
        let gtm = html.find("Google Tag Manager").unwrap();
        let ym = html.find("Yandex.Metrika").unwrap();
        let fb = html.find("Facebook Pixel").unwrap();
        assert!(ga < gtm && gtm < ym && ym < fb);
        assert!(html.contains("ym(333, \"init\""));
        assert!(html.contains("https://www.facebook.com/tr?id=444&ev=PageView&noscript=1"));
    }
}
