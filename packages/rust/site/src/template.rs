//! The static page scaffold: stylesheet and document shell.
//!
//! Everything dynamic (shop identity, product cards) is passed in already
//! escaped; this module only assembles strings.

/// The storefront stylesheet. Palette and layout follow the shop's printed
/// material (same purple/teal/pink/yellow set the flyer uses).
pub(crate) const STYLES: &str = r#"        :root {
            --purple: #9B59B6;
            --purple-dark: #7D3C98;
            --teal: #1ABC9C;
            --teal-dark: #16A085;
            --pink: #FF6B9D;
            --pink-light: #FFB8D0;
            --yellow: #FFDC50;
            --cream: #FFF9F0;
            --text-dark: #2C3E50;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Nunito', sans-serif;
            background: var(--cream);
            color: var(--text-dark);
            line-height: 1.6;
        }

        .bg-decoration {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            pointer-events: none;
            z-index: -1;
            overflow: hidden;
        }

        .bg-decoration::before,
        .bg-decoration::after {
            content: '';
            position: absolute;
            border-radius: 50%;
            opacity: 0.1;
        }

        .bg-decoration::before {
            width: 400px;
            height: 400px;
            background: var(--purple);
            top: -100px;
            right: -100px;
        }

        .bg-decoration::after {
            width: 300px;
            height: 300px;
            background: var(--teal);
            bottom: -50px;
            left: -50px;
        }

        header {
            background: linear-gradient(135deg, var(--pink) 0%, var(--purple) 50%, var(--teal) 100%);
            padding: 2rem 1rem;
            text-align: center;
            position: relative;
            overflow: hidden;
        }

        .logo {
            position: relative;
            z-index: 1;
        }

        h1 {
            font-family: 'Fredoka One', cursive;
            font-size: 3rem;
            color: white;
            text-shadow: 3px 3px 0 rgba(0,0,0,0.2);
            margin-bottom: 0.5rem;
        }

        .tagline {
            font-size: 1.3rem;
            color: white;
            opacity: 0.95;
            font-weight: 600;
        }

        nav {
            background: white;
            padding: 1rem;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            position: sticky;
            top: 0;
            z-index: 100;
        }

        nav ul {
            list-style: none;
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 1rem;
        }

        nav a {
            text-decoration: none;
            color: var(--purple-dark);
            font-weight: 700;
            padding: 0.5rem 1.5rem;
            border-radius: 25px;
            transition: all 0.3s ease;
        }

        nav a:hover {
            background: var(--purple);
            color: white;
        }

        main {
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem 1rem;
        }

        section {
            margin-bottom: 4rem;
        }

        h2 {
            font-family: 'Fredoka One', cursive;
            font-size: 2.2rem;
            color: var(--purple);
            text-align: center;
            margin-bottom: 2rem;
            position: relative;
        }

        h2::after {
            content: '';
            display: block;
            width: 80px;
            height: 4px;
            background: linear-gradient(90deg, var(--teal), var(--pink));
            margin: 0.5rem auto 0;
            border-radius: 2px;
        }

        .welcome {
            background: white;
            border-radius: 20px;
            padding: 2.5rem;
            text-align: center;
            box-shadow: 0 5px 20px rgba(155, 89, 182, 0.15);
            border: 3px solid var(--pink-light);
        }

        .welcome p {
            font-size: 1.2rem;
            max-width: 700px;
            margin: 0 auto;
        }

        .welcome .highlight {
            color: var(--purple);
            font-weight: 700;
        }

        .products-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
            gap: 2rem;
        }

        .product-card {
            background: white;
            border-radius: 20px;
            overflow: hidden;
            box-shadow: 0 5px 20px rgba(0,0,0,0.1);
            transition: transform 0.3s ease, box-shadow 0.3s ease;
        }

        .product-card:hover {
            transform: translateY(-5px);
            box-shadow: 0 10px 30px rgba(155, 89, 182, 0.2);
        }

        .product-card.sold {
            opacity: 0.7;
        }

        .product-image {
            width: 100%;
            height: 250px;
            background: linear-gradient(135deg, var(--pink-light) 0%, #E8DAEF 100%);
            display: flex;
            align-items: center;
            justify-content: center;
            position: relative;
            overflow: hidden;
        }

        .product-image img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }

        .product-image .no-image {
            color: var(--purple);
            font-weight: 600;
        }

        .sold-badge {
            position: absolute;
            top: 15px;
            right: -35px;
            background: var(--pink);
            color: white;
            padding: 5px 40px;
            font-weight: 700;
            transform: rotate(45deg);
            font-size: 0.9rem;
        }

        .product-info {
            padding: 1.5rem;
        }

        .product-info h3 {
            font-family: 'Fredoka One', cursive;
            color: var(--teal-dark);
            font-size: 1.3rem;
            margin-bottom: 0.5rem;
        }

        .product-info p {
            color: #666;
            margin-bottom: 1rem;
            min-height: 3rem;
        }

        .price {
            font-family: 'Fredoka One', cursive;
            font-size: 1.5rem;
            color: var(--pink);
        }

        .no-products {
            text-align: center;
            padding: 3rem;
            color: var(--purple);
            font-size: 1.2rem;
        }

        .order-steps {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 2rem;
        }

        .step {
            background: white;
            border-radius: 20px;
            padding: 2rem;
            text-align: center;
            box-shadow: 0 5px 20px rgba(0,0,0,0.08);
            border-top: 5px solid var(--teal);
        }

        .step-number {
            width: 50px;
            height: 50px;
            background: linear-gradient(135deg, var(--purple), var(--pink));
            color: white;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-family: 'Fredoka One', cursive;
            font-size: 1.5rem;
            margin: 0 auto 1rem;
        }

        .step h3 {
            color: var(--purple-dark);
            margin-bottom: 0.5rem;
        }

        .payment-options {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1.5rem;
            margin-top: 1.5rem;
        }

        .payment-option {
            background: white;
            padding: 1.5rem 2rem;
            border-radius: 15px;
            box-shadow: 0 3px 15px rgba(0,0,0,0.08);
            text-align: center;
            min-width: 150px;
        }

        .payment-option .icon {
            font-size: 2.5rem;
            margin-bottom: 0.5rem;
        }

        .payment-option h4 {
            color: var(--teal-dark);
            font-weight: 700;
        }

        .delivery-options {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 2rem;
            margin-top: 1.5rem;
        }

        .delivery-card {
            background: white;
            border-radius: 20px;
            padding: 2rem;
            text-align: center;
            box-shadow: 0 5px 20px rgba(0,0,0,0.08);
            border-left: 5px solid var(--pink);
        }

        .delivery-card .icon {
            font-size: 3rem;
            margin-bottom: 1rem;
        }

        .delivery-card h3 {
            color: var(--purple-dark);
            margin-bottom: 0.5rem;
        }

        .contact-box {
            background: linear-gradient(135deg, var(--purple) 0%, var(--teal) 100%);
            border-radius: 20px;
            padding: 3rem;
            text-align: center;
            color: white;
        }

        .contact-box h2 {
            color: white;
        }

        .contact-box h2::after {
            background: white;
        }

        .contact-box p {
            font-size: 1.2rem;
            margin-bottom: 1.5rem;
        }

        .contact-email {
            display: inline-block;
            background: white;
            color: var(--purple-dark);
            font-family: 'Fredoka One', cursive;
            font-size: 1.3rem;
            padding: 1rem 2rem;
            border-radius: 30px;
            text-decoration: none;
            transition: transform 0.3s ease;
        }

        .contact-email:hover {
            transform: scale(1.05);
        }

        footer {
            background: var(--text-dark);
            color: white;
            text-align: center;
            padding: 2rem;
            margin-top: 2rem;
        }

        footer p {
            opacity: 0.8;
        }

        .footer-hearts {
            font-size: 1.5rem;
            margin-bottom: 0.5rem;
        }

        @media (max-width: 768px) {
            h1 {
                font-size: 2rem;
            }

            .tagline {
                font-size: 1rem;
            }

            h2 {
                font-size: 1.8rem;
            }

            nav ul {
                gap: 0.5rem;
            }

            nav a {
                padding: 0.4rem 1rem;
                font-size: 0.9rem;
            }
        }"#;

/// Fields for the document shell. Every string must already be HTML-escaped.
pub(crate) struct PageFields<'a> {
    pub name: &'a str,
    pub tagline: &'a str,
    pub owner: &'a str,
    pub contact_email: &'a str,
    pub products_html: &'a str,
}

/// Assemble the complete storefront document.
pub(crate) fn page(fields: &PageFields<'_>) -> String {
    let PageFields {
        name,
        tagline,
        owner,
        contact_email,
        products_html,
    } = fields;

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} | {tagline}</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Fredoka+One&family=Nunito:wght@400;600;700&display=swap" rel="stylesheet">
    <style>
{styles}
    </style>
</head>
<body>
    <div class="bg-decoration"></div>

    <header>
        <div class="logo">
            <h1>{name}</h1>
            <p class="tagline">{tagline}</p>
        </div>
    </header>

    <nav>
        <ul>
            <li><a href="#welcome">Home</a></li>
            <li><a href="#products">Shop</a></li>
            <li><a href="#how-to-order">How to Order</a></li>
            <li><a href="#payment">Payment</a></li>
            <li><a href="#contact">Contact</a></li>
        </ul>
    </nav>

    <main>
        <section id="welcome" class="welcome">
            <h2>Welcome!</h2>
            <p>
                Hi! I'm <span class="highlight">{owner}</span>, and every piece in this shop is
                <span class="highlight">made by hand</span> — no two are ever quite the same.
                Have a look below and take one home today!
            </p>
        </section>

        <section id="products">
            <h2>My Creations</h2>
            <div class="products-grid">
{products_html}
            </div>
        </section>

        <section id="how-to-order">
            <h2>How to Order</h2>
            <div class="order-steps">
                <div class="step">
                    <div class="step-number">1</div>
                    <h3>Pick Your Favorites</h3>
                    <p>Browse the shop and decide which pieces you'd like!</p>
                </div>
                <div class="step">
                    <div class="step-number">2</div>
                    <h3>Send a Message</h3>
                    <p>Email us with what you want to order and how you'd like to receive it.</p>
                </div>
                <div class="step">
                    <div class="step-number">3</div>
                    <h3>Enjoy!</h3>
                    <p>Pick up locally or have your order shipped to you!</p>
                </div>
            </div>
        </section>

        <section id="delivery">
            <h2>Delivery Options</h2>
            <div class="delivery-options">
                <div class="delivery-card">
                    <div class="icon">🏠</div>
                    <h3>Local Pickup</h3>
                    <p>Pick up your order in person! Free for neighbors and local orders. We'll arrange a time that works for you.</p>
                </div>
                <div class="delivery-card">
                    <div class="icon">📦</div>
                    <h3>Shipping</h3>
                    <p>We can ship anywhere! Shipping cost depends on location. We'll let you know the price before you pay.</p>
                </div>
            </div>
        </section>

        <section id="payment">
            <h2>Payment Options</h2>
            <p style="text-align: center; margin-bottom: 1rem;">We accept several easy ways to pay:</p>
            <div class="payment-options">
                <div class="payment-option">
                    <div class="icon">💵</div>
                    <h4>Cash</h4>
                    <p>For local pickup</p>
                </div>
                <div class="payment-option">
                    <div class="icon">🅿️</div>
                    <h4>PayPal</h4>
                    <p>Safe &amp; easy online</p>
                </div>
                <div class="payment-option">
                    <div class="icon">💳</div>
                    <h4>Venmo</h4>
                    <p>Quick mobile payment</p>
                </div>
            </div>
        </section>

        <section id="contact">
            <div class="contact-box">
                <h2>Ready to Order?</h2>
                <p>Send us an email and we'll get back to you super fast!</p>
                <a href="mailto:{contact_email}" class="contact-email">
                    {contact_email}
                </a>
                <p style="margin-top: 1.5rem; font-size: 1rem; opacity: 0.9;">
                    Please include: which items you want, your name, and if you want pickup or shipping!
                </p>
            </div>
        </section>
    </main>

    <footer>
        <div class="footer-hearts">💜 💙 💖</div>
        <p>Made with love by {owner} | {name}</p>
    </footer>
</body>
</html>
"##,
        styles = STYLES,
    )
}
